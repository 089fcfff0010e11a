//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Session errors
//! - 5xxx: Payment/debt errors
//! - 6xxx: Game catalog errors
//! - 7xxx: Table errors
//! - 8xxx: Player errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values for efficient serialization and
/// cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session token is invalid or expired
    TokenInvalid = 1004,

    // ==================== 4xxx: Session ====================
    /// Table already has an active session
    TableOccupied = 4001,
    /// Table has no active session
    NoActiveSession = 4002,
    /// Player count outside the allowed 1–4 range
    InvalidPlayerCount = 4003,
    /// Split breakdown does not match the session's player set
    InvalidSplit = 4004,
    /// Teams split with an empty team
    EmptyTeam = 4005,
    /// Custom split amounts do not sum to the total bill
    SplitTotalMismatch = 4006,
    /// On-credit payment names a player who is not a registered participant
    CreditPlayerNotEligible = 4007,

    // ==================== 5xxx: Payment / Debt ====================
    /// No outstanding debt recorded for the player
    DebtNotFound = 5001,
    /// Monetary amount is invalid (negative or out of range)
    InvalidAmount = 5002,

    // ==================== 6xxx: Game Catalog ====================
    /// Game type not found
    GameTypeNotFound = 6001,
    /// Game type exists but is disabled
    GameTypeDisabled = 6002,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table cannot be removed while occupied
    TableStillOccupied = 7002,

    // ==================== 8xxx: Player ====================
    /// Player not found
    PlayerNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database/storage error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenInvalid => "Session token is invalid",
            Self::TableOccupied => "Table already has an active session",
            Self::NoActiveSession => "Table has no active session",
            Self::InvalidPlayerCount => "Sessions require between 1 and 4 players",
            Self::InvalidSplit => "Split breakdown does not match the session players",
            Self::EmptyTeam => "Both teams must have at least one player",
            Self::SplitTotalMismatch => "Custom amounts must sum to the total bill",
            Self::CreditPlayerNotEligible => {
                "Credit player must be a registered session participant"
            }
            Self::DebtNotFound => "No outstanding debt for this player",
            Self::InvalidAmount => "Invalid amount",
            Self::GameTypeNotFound => "Game type not found",
            Self::GameTypeDisabled => "Game type is disabled",
            Self::TableNotFound => "Table not found",
            Self::TableStillOccupied => "Table cannot be removed while occupied",
            Self::PlayerNotFound => "Player not found",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1004 => Self::TokenInvalid,
            4001 => Self::TableOccupied,
            4002 => Self::NoActiveSession,
            4003 => Self::InvalidPlayerCount,
            4004 => Self::InvalidSplit,
            4005 => Self::EmptyTeam,
            4006 => Self::SplitTotalMismatch,
            4007 => Self::CreditPlayerNotEligible,
            5001 => Self::DebtNotFound,
            5002 => Self::InvalidAmount,
            6001 => Self::GameTypeNotFound,
            6002 => Self::GameTypeDisabled,
            7001 => Self::TableNotFound,
            7002 => Self::TableStillOccupied,
            8001 => Self::PlayerNotFound,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,
            other => return Err(format!("unknown error code: {other}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::TableOccupied,
            ErrorCode::SplitTotalMismatch,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(12345).is_err());
    }
}
