use chrono::NaiveDate;
use courtbook_api::handlers::booking::parse_slot_index;
use courtbook_api::handlers::slots::slot_at_index;
use courtbook_api::middleware::error_handling::AppError;
use courtbook_core::errors::CourtError;
use courtbook_core::models::booking::{
    BookingAction, BookingStatus, BookingSummary, UpdateBookingRequest,
};
use courtbook_core::models::time_slot::formatted_hour;
use courtbook_db::models::DbUser;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{default_slots, sample_booking, sample_court, sample_user, TestContext};

// Mirrors the update-booking handler's decision sequence against the mock
// repositories, so the transition logic runs without a database.
async fn set_slot_status_wrapper(
    ctx: &mut TestContext,
    payload: UpdateBookingRequest,
    user: &DbUser,
) -> Result<BookingSummary, AppError> {
    let (Some(court_id), Some(slot_ref), Some(status_raw)) =
        (&payload.court_id, &payload.time_slot_id, &payload.status)
    else {
        return Err(AppError(CourtError::Validation(
            "Missing required fields: courtId, timeSlotId, status".to_string(),
        )));
    };

    let status: BookingStatus = status_raw.parse().map_err(|_| {
        AppError(CourtError::Validation(
            "Invalid status. Valid options: available, booked, maintenance, reserved".to_string(),
        ))
    })?;

    let date = match &payload.date {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map_err(|_| AppError(CourtError::Validation("Invalid date format".to_string())))?,
        None => chrono::Utc::now().date_naive(),
    };

    let invalid = || AppError(CourtError::Validation("Invalid court or time slot".to_string()));

    let time_slots = ctx.time_slot_repo.list_time_slots().await?;
    let slot_index = parse_slot_index(slot_ref).ok_or_else(invalid)?;
    let time_slot = slot_at_index(&time_slots, slot_index)
        .ok_or_else(invalid)?
        .clone();

    let court_uuid = Uuid::parse_str(court_id).map_err(|_| invalid())?;
    let court = ctx
        .court_repo
        .get_court_by_id(court_uuid)
        .await?
        .ok_or_else(invalid)?;

    if status == BookingStatus::Available {
        let deleted = ctx
            .booking_repo
            .delete_booking(court.id, time_slot.id, date)
            .await?;

        Ok(BookingSummary {
            id: None,
            court: court.name,
            time_slot: formatted_hour(time_slot.hour),
            date: date.to_string(),
            status,
            user: user.username.clone(),
            action: if deleted {
                BookingAction::Deleted
            } else {
                BookingAction::NoChange
            },
        })
    } else {
        let (row, created) = ctx
            .booking_repo
            .upsert_booking(court.id, time_slot.id, date, status, user.id)
            .await?;

        Ok(BookingSummary {
            id: Some(row.id.to_string()),
            court: court.name,
            time_slot: formatted_hour(time_slot.hour),
            date: date.to_string(),
            status,
            user: user.username.clone(),
            action: if created {
                BookingAction::Created
            } else {
                BookingAction::Updated
            },
        })
    }
}

fn request(
    court_id: &str,
    slot: serde_json::Value,
    status: &str,
    date: Option<&str>,
) -> UpdateBookingRequest {
    UpdateBookingRequest {
        court_id: Some(court_id.to_string()),
        time_slot_id: Some(slot),
        status: Some(status.to_string()),
        date: date.map(|d| d.to_string()),
    }
}

fn assert_validation_containing(result: Result<BookingSummary, AppError>, fragment: &str) {
    match result.unwrap_err().0 {
        CourtError::Validation(msg) => assert!(
            msg.contains(fragment),
            "expected message containing {:?}, got {:?}",
            fragment,
            msg
        ),
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[test]
fn test_parse_slot_index_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_slot_index(&json!(3)), Some(3));
    assert_eq!(parse_slot_index(&json!("3")), Some(3));
    assert_eq!(parse_slot_index(&json!(" 16 ")), Some(16));
    assert_eq!(parse_slot_index(&json!(0)), Some(0));
    assert_eq!(parse_slot_index(&json!(-1)), None);
    assert_eq!(parse_slot_index(&json!("abc")), None);
    assert_eq!(parse_slot_index(&json!(true)), None);
    assert_eq!(parse_slot_index(&json!(1.5)), None);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");

    let result = set_slot_status_wrapper(&mut ctx, UpdateBookingRequest::default(), &user).await;

    assert_validation_containing(result, "Missing required fields");
}

#[tokio::test]
async fn test_invalid_status_rejected_regardless_of_other_fields() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");

    let payload = request(&Uuid::new_v4().to_string(), json!(1), "not_a_status", None);
    let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

    assert_validation_containing(result, "Invalid status");
}

#[tokio::test]
async fn test_malformed_date_rejected() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");

    let payload = request(
        &Uuid::new_v4().to_string(),
        json!(1),
        "booked",
        Some("01/01/2024"),
    );
    let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

    assert_validation_containing(result, "Invalid date format");
}

#[tokio::test]
async fn test_out_of_range_slot_index_rejected() {
    let user = sample_user("alice");
    let slots = default_slots();

    for index in [json!(0), json!(17)] {
        let mut ctx = TestContext::new();
        let slots = slots.clone();
        ctx.time_slot_repo
            .expect_list_time_slots()
            .returning(move || Ok(slots.clone()));

        let payload = request(
            &Uuid::new_v4().to_string(),
            index,
            "booked",
            Some("2024-01-01"),
        );
        let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

        assert_validation_containing(result, "Invalid court or time slot");
    }
}

#[tokio::test]
async fn test_non_numeric_slot_reference_rejected() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");
    let slots = default_slots();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .returning(move || Ok(slots.clone()));

    let payload = request(
        &Uuid::new_v4().to_string(),
        json!("first"),
        "booked",
        Some("2024-01-01"),
    );
    let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

    assert_validation_containing(result, "Invalid court or time slot");
}

#[tokio::test]
async fn test_unknown_court_rejected_with_coarse_message() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");
    let slots = default_slots();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .returning(move || Ok(slots.clone()));
    ctx.court_repo
        .expect_get_court_by_id()
        .returning(|_| Ok(None));

    let payload = request(
        &Uuid::new_v4().to_string(),
        json!(1),
        "booked",
        Some("2024-01-01"),
    );
    let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

    assert_validation_containing(result, "Invalid court or time slot");
}

#[tokio::test]
async fn test_malformed_court_id_rejected() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");
    let slots = default_slots();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .returning(move || Ok(slots.clone()));

    let payload = request("not-a-uuid", json!(1), "booked", Some("2024-01-01"));
    let result = set_slot_status_wrapper(&mut ctx, payload, &user).await;

    assert_validation_containing(result, "Invalid court or time slot");
}

#[tokio::test]
async fn test_setting_available_twice_deletes_then_reports_no_change() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");
    let slots = default_slots();
    let court = sample_court("badminton", "Court 1");
    let slot_id = slots[0].id;

    let mock_slots = slots.clone();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .times(2)
        .returning(move || Ok(mock_slots.clone()));
    let mock_court = court.clone();
    ctx.court_repo
        .expect_get_court_by_id()
        .with(predicate::eq(court.id))
        .times(2)
        .returning(move |_| Ok(Some(mock_court.clone())));

    // First call removes the row, the second finds nothing to remove
    ctx.booking_repo
        .expect_delete_booking()
        .with(
            predicate::eq(court.id),
            predicate::eq(slot_id),
            predicate::eq(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        )
        .times(1)
        .returning(|_, _, _| Ok(true));
    ctx.booking_repo
        .expect_delete_booking()
        .times(1)
        .returning(|_, _, _| Ok(false));

    let payload = request(
        &court.id.to_string(),
        json!(1),
        "available",
        Some("2024-01-01"),
    );

    let first = set_slot_status_wrapper(&mut ctx, payload.clone(), &user)
        .await
        .unwrap();
    assert_eq!(first.action, BookingAction::Deleted);
    assert!(first.id.is_none());

    let second = set_slot_status_wrapper(&mut ctx, payload, &user)
        .await
        .unwrap();
    assert_eq!(second.action, BookingAction::NoChange);
    assert_eq!(second.status, BookingStatus::Available);
}

#[tokio::test]
async fn test_upsert_reports_created_then_updated() {
    let mut ctx = TestContext::new();
    let user = sample_user("alice");
    let slots = default_slots();
    let court = sample_court("badminton", "Court 1");
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let row = sample_booking(court.id, slots[0].id, date, "booked");
    let row_id = row.id;

    let mock_slots = slots.clone();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .times(2)
        .returning(move || Ok(mock_slots.clone()));
    let mock_court = court.clone();
    ctx.court_repo
        .expect_get_court_by_id()
        .times(2)
        .returning(move |_| Ok(Some(mock_court.clone())));

    // The second write for the same triple updates the surviving row
    let first_row = row.clone();
    ctx.booking_repo
        .expect_upsert_booking()
        .times(1)
        .returning(move |_, _, _, _, _| Ok((first_row.clone(), true)));
    let second_row = row.clone();
    ctx.booking_repo
        .expect_upsert_booking()
        .times(1)
        .returning(move |_, _, _, _, _| Ok((second_row.clone(), false)));

    let payload = request(&court.id.to_string(), json!(1), "booked", Some("2024-01-01"));

    let first = set_slot_status_wrapper(&mut ctx, payload.clone(), &user)
        .await
        .unwrap();
    assert_eq!(first.action, BookingAction::Created);
    assert_eq!(first.id.as_deref(), Some(row_id.to_string().as_str()));

    let second = set_slot_status_wrapper(&mut ctx, payload, &user)
        .await
        .unwrap();
    assert_eq!(second.action, BookingAction::Updated);
    assert_eq!(second.id.as_deref(), Some(row_id.to_string().as_str()));
}

#[tokio::test]
async fn test_maintenance_write_carries_status_and_acting_user() {
    let mut ctx = TestContext::new();
    let user = sample_user("facilities");
    let slots = default_slots();
    let court = sample_court("squash", "Court 2");
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let row = sample_booking(court.id, slots[0].id, date, "maintenance");

    let mock_slots = slots.clone();
    ctx.time_slot_repo
        .expect_list_time_slots()
        .returning(move || Ok(mock_slots.clone()));
    let mock_court = court.clone();
    ctx.court_repo
        .expect_get_court_by_id()
        .returning(move |_| Ok(Some(mock_court.clone())));
    ctx.booking_repo
        .expect_upsert_booking()
        .with(
            predicate::eq(court.id),
            predicate::eq(slots[0].id),
            predicate::eq(date),
            predicate::eq(BookingStatus::Maintenance),
            predicate::eq(user.id),
        )
        .times(1)
        .returning(move |_, _, _, _, _| Ok((row.clone(), true)));

    let payload = request(
        &court.id.to_string(),
        json!("1"),
        "maintenance",
        Some("2024-03-15"),
    );
    let summary = set_slot_status_wrapper(&mut ctx, payload, &user)
        .await
        .unwrap();

    assert_eq!(summary.status, BookingStatus::Maintenance);
    assert_eq!(summary.user, "facilities");
    assert_eq!(summary.court, "Court 2");
    assert_eq!(summary.time_slot, "7:00 AM");
    assert_eq!(summary.date, "2024-03-15");
}
