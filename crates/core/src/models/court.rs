use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable court. Every court belongs to exactly one sport; deleting the
/// sport cascades to its courts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub id: Uuid,
    pub sport_id: String,
    pub name: String,
}
