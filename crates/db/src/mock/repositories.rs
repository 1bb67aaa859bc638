use chrono::NaiveDate;
use courtbook_core::errors::CourtResult;
use courtbook_core::models::booking::BookingStatus;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbCourt, DbSport, DbTimeSlot, DbUser};

// Mock repositories for testing
mock! {
    pub SportRepo {
        pub async fn list_sports(&self) -> eyre::Result<Vec<DbSport>>;

        pub async fn get_sport_by_id(
            &self,
            id: &'static str,
        ) -> eyre::Result<Option<DbSport>>;

        pub async fn first_sport(&self) -> eyre::Result<Option<DbSport>>;

        pub async fn get_or_create_sport(
            &self,
            id: &'static str,
            name: &'static str,
        ) -> eyre::Result<DbSport>;
    }
}

mock! {
    pub CourtRepo {
        pub async fn get_court_by_id(&self, id: Uuid) -> eyre::Result<Option<DbCourt>>;

        pub async fn list_courts_by_sport(
            &self,
            sport_id: &'static str,
        ) -> eyre::Result<Vec<DbCourt>>;

        pub async fn get_or_create_court(
            &self,
            sport_id: &'static str,
            name: &'static str,
        ) -> eyre::Result<DbCourt>;
    }
}

mock! {
    pub TimeSlotRepo {
        pub async fn list_time_slots(&self) -> eyre::Result<Vec<DbTimeSlot>>;

        pub async fn ensure_default_slots(&self) -> eyre::Result<()>;

        pub async fn count_time_slots(&self) -> eyre::Result<i64>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn list_bookings_for_sport(
            &self,
            sport_id: &'static str,
            date: NaiveDate,
        ) -> CourtResult<Vec<DbBooking>>;

        pub async fn delete_booking(
            &self,
            court_id: Uuid,
            time_slot_id: Uuid,
            date: NaiveDate,
        ) -> CourtResult<bool>;

        pub async fn upsert_booking(
            &self,
            court_id: Uuid,
            time_slot_id: Uuid,
            date: NaiveDate,
            status: BookingStatus,
            user_id: Uuid,
        ) -> CourtResult<(DbBooking, bool)>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_token(
            &self,
            api_token: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn create_user(&self, username: &'static str) -> eyre::Result<DbUser>;
    }
}
