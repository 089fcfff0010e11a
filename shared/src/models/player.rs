//! Player directory models

use serde::{Deserialize, Serialize};

/// Membership tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipType {
    #[default]
    Regular,
    Premium,
    Vip,
}

/// Player entity (registered club member)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub membership: MembershipType,
    /// Directory bookkeeping, maintained by the operator
    pub total_visits: i64,
    /// Total paid in currency units
    pub total_paid: i64,
    /// Last visit date (YYYY-MM-DD)
    pub last_visit: String,
    /// Join date (YYYY-MM-DD)
    pub join_date: String,
}

/// Create player payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub membership: MembershipType,
}

/// Update player payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub membership: Option<MembershipType>,
}
