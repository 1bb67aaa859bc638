use chrono::NaiveDate;
use courtbook_api::handlers::slots::{slot_at_index, slot_index_of};
use courtbook_api::handlers::status::build_status_grid;
use courtbook_core::models::booking::BookingStatus;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{default_slots, sample_booking, sample_court, sample_slots, sample_sport};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn test_slot_at_index_boundaries() {
    let slots = default_slots();

    // 1-based: index 0 is never valid
    assert!(slot_at_index(&slots, 0).is_none());
    assert_eq!(slot_at_index(&slots, 1).unwrap().hour, 7);
    assert_eq!(slot_at_index(&slots, 16).unwrap().hour, 22);
    assert!(slot_at_index(&slots, 17).is_none());
}

#[test]
fn test_slot_index_of_round_trips() {
    let slots = default_slots();

    for index in 1..=slots.len() {
        let slot = slot_at_index(&slots, index).unwrap();
        assert_eq!(slot_index_of(&slots, slot.id), Some(index));
    }
}

#[test]
fn test_slot_index_of_unknown_slot() {
    let slots = default_slots();

    assert_eq!(slot_index_of(&slots, Uuid::new_v4()), None);
}

#[test]
fn test_grid_defaults_every_cell_to_available() {
    let slots = default_slots();
    let courts = vec![sample_court("badminton", "Court 1"), sample_court("badminton", "Court 2")];

    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("badminton", "Badminton")],
        "badminton".to_string(),
        slots,
        courts,
        vec![],
    );

    assert_eq!(grid.courts.len(), 2);
    for court in &grid.courts {
        assert_eq!(court.slots.len(), 16);
        for (index, entry) in &court.slots {
            assert_eq!(entry.status, BookingStatus::Available);
            assert_eq!(entry.id, index.to_string());
        }
    }
}

#[test]
fn test_grid_slot_entries_follow_hour_order() {
    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("badminton", "Badminton")],
        "badminton".to_string(),
        default_slots(),
        vec![],
        vec![],
    );

    assert_eq!(grid.time_slots.len(), 16);
    assert_eq!(grid.time_slots[0].id, 1);
    assert_eq!(grid.time_slots[0].formatted_slot, "7:00 AM");
    assert_eq!(grid.time_slots[15].id, 16);
    assert_eq!(grid.time_slots[15].formatted_slot, "10:00 PM");
}

#[test]
fn test_grid_overlays_booking_status() {
    let slots = default_slots();
    let court_a = sample_court("badminton", "Court 1");
    let court_b = sample_court("badminton", "Court 2");
    // Book the earliest slot (frontend index 1) on the first court
    let booking = sample_booking(court_a.id, slots[0].id, test_date(), "booked");

    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("badminton", "Badminton")],
        "badminton".to_string(),
        slots,
        vec![court_a.clone(), court_b.clone()],
        vec![booking],
    );

    let grid_a = &grid.courts[0];
    assert_eq!(grid_a.id, court_a.id.to_string());
    assert_eq!(grid_a.slots[&1].status, BookingStatus::Booked);
    assert_eq!(grid_a.slots[&1].time, "7:00 AM");
    for index in 2..=16 {
        assert_eq!(grid_a.slots[&index].status, BookingStatus::Available);
    }

    // The other court is untouched
    let grid_b = &grid.courts[1];
    for index in 1..=16 {
        assert_eq!(grid_b.slots[&index].status, BookingStatus::Available);
    }
}

#[test]
fn test_grid_reflects_maintenance_status_at_index() {
    let slots = default_slots();
    let court = sample_court("squash", "Court 3");
    // Hour 12 sits at frontend index 6 of the default catalog
    let booking = sample_booking(court.id, slots[5].id, test_date(), "maintenance");

    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("squash", "Squash")],
        "squash".to_string(),
        slots,
        vec![court],
        vec![booking],
    );

    assert_eq!(grid.courts[0].slots[&6].status, BookingStatus::Maintenance);
}

#[test]
fn test_grid_skips_bookings_for_deleted_slots() {
    let slots = default_slots();
    let court = sample_court("badminton", "Court 1");
    // A booking whose slot id is no longer in the catalog
    let orphaned = sample_booking(court.id, Uuid::new_v4(), test_date(), "booked");

    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("badminton", "Badminton")],
        "badminton".to_string(),
        slots,
        vec![court],
        vec![orphaned],
    );

    for index in 1..=16 {
        assert_eq!(grid.courts[0].slots[&index].status, BookingStatus::Available);
    }
}

#[test]
fn test_grid_passes_through_header_fields() {
    let sports = vec![
        sample_sport("badminton", "Badminton"),
        sample_sport("squash", "Squash"),
    ];

    let grid = build_status_grid(
        test_date(),
        "01:05 PM".to_string(),
        sports,
        "squash".to_string(),
        sample_slots(&[9, 10]),
        vec![],
        vec![],
    );

    assert_eq!(grid.date, "2024-01-01");
    assert_eq!(grid.current_time, "01:05 PM");
    assert_eq!(grid.selected_sport, "squash");
    assert_eq!(grid.sports.len(), 2);
    assert_eq!(grid.sports[0].id, "badminton");
    assert_eq!(grid.sports[1].name, "Squash");
}

#[test]
fn test_grid_with_unseeded_slot_subset() {
    // Positions always come from the current sort order, whatever it holds
    let slots = sample_slots(&[9, 14, 20]);
    let court = sample_court("basketball", "Basketball Court 1");
    let booking = sample_booking(court.id, slots[2].id, test_date(), "reserved");

    let grid = build_status_grid(
        test_date(),
        "09:30 AM".to_string(),
        vec![sample_sport("basketball", "Basketball")],
        "basketball".to_string(),
        slots,
        vec![court],
        vec![booking],
    );

    assert_eq!(grid.time_slots.len(), 3);
    assert_eq!(grid.time_slots[2].formatted_slot, "8:00 PM");
    assert_eq!(grid.courts[0].slots[&3].status, BookingStatus::Reserved);
    assert_eq!(grid.courts[0].slots[&1].status, BookingStatus::Available);
}
