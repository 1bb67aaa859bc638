use serde::{Deserialize, Serialize};

/// A sport offered by the facility. Ids are human-assigned slugs
/// ("badminton", "table-tennis"), not generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
}
