//! Credential service
//!
//! Seeded-account lookup plus opaque session tokens. The token is only a
//! tenant-resolution handle for subsequent requests; there is no role or
//! permission model behind it.

use dashmap::DashMap;
use serde::Serialize;
use shared::models::{ClubAccount, ClubProfile, ClubProfileUpdate};
use shared::AppError;

use crate::store::ClubStorage;
use crate::utils::error::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

/// Successful login payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginSession {
    pub token: String,
    pub profile: ClubProfile,
}

fn seed_accounts() -> Vec<ClubAccount> {
    vec![
        ClubAccount {
            email: "ali@club.com".to_string(),
            password: "password123".to_string(),
            profile: ClubProfile {
                club_name: "Ali's Snooker Club".to_string(),
                owner_name: "Ali Khan".to_string(),
                phone: String::new(),
                email: "ali@club.com".to_string(),
                location: "Karachi".to_string(),
                tables: 8,
            },
        },
        ClubAccount {
            email: "hassan@club.com".to_string(),
            password: "password123".to_string(),
            profile: ClubProfile {
                club_name: "Hassan's Snooker Hall".to_string(),
                owner_name: "Hassan Ali".to_string(),
                phone: String::new(),
                email: "hassan@club.com".to_string(),
                location: "Lahore".to_string(),
                tables: 10,
            },
        },
    ]
}

#[derive(Debug)]
pub struct CredentialService {
    storage: ClubStorage,
    /// token → tenant email
    tokens: DashMap<String, String>,
}

impl CredentialService {
    pub fn new(storage: ClubStorage) -> Self {
        Self {
            storage,
            tokens: DashMap::new(),
        }
    }

    /// Write the stock accounts unless they already exist
    ///
    /// Existing records are left alone so profile edits survive restarts.
    pub fn ensure_seed_accounts(&self) -> AppResult<()> {
        for account in seed_accounts() {
            if self.storage.get_account(&account.email)?.is_none() {
                self.storage.put_account(&account)?;
                tracing::info!(email = %account.email, "Seeded club account");
            }
        }
        Ok(())
    }

    /// Exact email+password lookup; success mints a session token
    pub fn login(&self, email: &str, password: &str) -> AppResult<LoginSession> {
        let email = email.trim().to_lowercase();
        let account = self
            .storage
            .get_account(&email)?
            .filter(|a| a.password == password)
            .ok_or_else(AppError::invalid_credentials)?;

        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), account.email.clone());
        tracing::info!(tenant = %account.email, "Operator logged in");
        Ok(LoginSession {
            token,
            profile: account.profile,
        })
    }

    /// Drop a session token; returns whether it existed
    pub fn logout(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    /// Tenant email for a live token
    pub fn resolve_token(&self, token: &str) -> Option<String> {
        self.tokens.get(token).map(|entry| entry.value().clone())
    }

    pub fn profile(&self, tenant: &str) -> AppResult<ClubProfile> {
        Ok(self
            .storage
            .get_account(tenant)?
            .ok_or_else(|| AppError::not_found(format!("account {tenant}")))?
            .profile)
    }

    pub fn update_profile(
        &self,
        tenant: &str,
        payload: ClubProfileUpdate,
    ) -> AppResult<ClubProfile> {
        let mut account = self
            .storage
            .get_account(tenant)?
            .ok_or_else(|| AppError::not_found(format!("account {tenant}")))?;

        if let Some(club_name) = payload.club_name {
            validate_required_text(&club_name, "club_name", MAX_NAME_LEN)?;
            account.profile.club_name = club_name.trim().to_string();
        }
        if let Some(owner_name) = payload.owner_name {
            validate_required_text(&owner_name, "owner_name", MAX_NAME_LEN)?;
            account.profile.owner_name = owner_name.trim().to_string();
        }
        if let Some(phone) = payload.phone {
            account.profile.phone = phone.trim().to_string();
        }
        if let Some(location) = payload.location {
            validate_required_text(&location, "location", MAX_SHORT_TEXT_LEN)?;
            account.profile.location = location.trim().to_string();
        }
        self.storage.put_account(&account)?;
        Ok(account.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn service() -> CredentialService {
        let credentials = CredentialService::new(ClubStorage::open_in_memory().unwrap());
        credentials.ensure_seed_accounts().unwrap();
        credentials
    }

    #[test]
    fn test_login_and_token_resolution() {
        let credentials = service();
        let session = credentials.login("ali@club.com", "password123").unwrap();
        assert_eq!(session.profile.club_name, "Ali's Snooker Club");
        assert_eq!(session.profile.tables, 8);

        assert_eq!(
            credentials.resolve_token(&session.token).as_deref(),
            Some("ali@club.com")
        );
        assert!(credentials.logout(&session.token));
        assert!(credentials.resolve_token(&session.token).is_none());
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let credentials = service();
        assert_eq!(
            credentials
                .login("ali@club.com", "wrong")
                .unwrap_err()
                .code,
            ErrorCode::InvalidCredentials
        );
        assert_eq!(
            credentials
                .login("nobody@club.com", "password123")
                .unwrap_err()
                .code,
            ErrorCode::InvalidCredentials
        );
    }

    #[test]
    fn test_profile_update_survives_reseed() {
        let credentials = service();
        let profile = credentials
            .update_profile(
                "ali@club.com",
                ClubProfileUpdate {
                    club_name: Some("Karachi Cue Palace".to_string()),
                    owner_name: None,
                    phone: Some("0300-5550000".to_string()),
                    location: None,
                },
            )
            .unwrap();
        assert_eq!(profile.club_name, "Karachi Cue Palace");

        // Re-running the seed must not clobber the edit
        credentials.ensure_seed_accounts().unwrap();
        assert_eq!(
            credentials.profile("ali@club.com").unwrap().club_name,
            "Karachi Cue Palace"
        );
    }
}
