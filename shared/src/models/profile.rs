//! Club profile and account models

use serde::{Deserialize, Serialize};

/// Club profile settings (per tenant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClubProfile {
    pub club_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    pub location: String,
    /// Number of tables seeded on first use
    pub tables: u32,
}

/// Update profile payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubProfileUpdate {
    pub club_name: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Seeded credential record
///
/// The account's email doubles as the tenant identifier every store key is
/// scoped by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubAccount {
    pub email: String,
    pub password: String,
    pub profile: ClubProfile,
}
