//! Player directory service
//!
//! Registered club members. The session engine resolves participant names
//! here (case-insensitive exact match) when a session starts; everything
//! else is operator CRUD.

use shared::models::{Player, PlayerCreate, PlayerUpdate};
use shared::{AppError, ErrorCode};

use crate::store::ClubStorage;
use crate::utils::error::AppResult;
use crate::utils::time::today_string;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

#[derive(Debug, Clone)]
pub struct DirectoryService {
    storage: ClubStorage,
}

impl DirectoryService {
    pub fn new(storage: ClubStorage) -> Self {
        Self { storage }
    }

    /// All players, sorted by name
    pub fn list(&self, tenant: &str) -> AppResult<Vec<Player>> {
        let mut players = self.storage.list_players(tenant)?;
        players.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(players)
    }

    /// Case-insensitive exact-name lookup
    pub fn resolve(&self, tenant: &str, name: &str) -> AppResult<Option<Player>> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .storage
            .list_players(tenant)?
            .into_iter()
            .find(|p| p.name.to_lowercase() == needle))
    }

    pub fn create(&self, tenant: &str, payload: PlayerCreate) -> AppResult<Player> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

        let today = today_string();
        let player = Player {
            id: format!("player-{}", uuid::Uuid::new_v4()),
            name: payload.name.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            membership: payload.membership,
            total_visits: 0,
            total_paid: 0,
            last_visit: today.clone(),
            join_date: today,
        };
        self.storage.put_player(tenant, &player)?;
        tracing::info!(tenant = %tenant, player = %player.name, "Player registered");
        Ok(player)
    }

    pub fn update(&self, tenant: &str, id: &str, payload: PlayerUpdate) -> AppResult<Player> {
        let mut player = self
            .storage
            .get_player(tenant, id)?
            .ok_or_else(|| AppError::new(ErrorCode::PlayerNotFound))?;

        if let Some(name) = payload.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            player.name = name.trim().to_string();
        }
        if let Some(phone) = payload.phone {
            validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;
            player.phone = phone.trim().to_string();
        }
        if let Some(membership) = payload.membership {
            player.membership = membership;
        }
        self.storage.put_player(tenant, &player)?;
        Ok(player)
    }

    pub fn delete(&self, tenant: &str, id: &str) -> AppResult<bool> {
        if !self.storage.delete_player(tenant, id)? {
            return Err(AppError::new(ErrorCode::PlayerNotFound));
        }
        tracing::info!(tenant = %tenant, player_id = %id, "Player removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MembershipType;

    const TENANT: &str = "ali@club.com";

    fn service() -> DirectoryService {
        DirectoryService::new(ClubStorage::open_in_memory().unwrap())
    }

    #[test]
    fn test_create_and_resolve_case_insensitive() {
        let directory = service();
        let player = directory
            .create(
                TENANT,
                PlayerCreate {
                    name: " Ahmed Khan ".to_string(),
                    phone: "0300-1234567".to_string(),
                    membership: MembershipType::Vip,
                },
            )
            .unwrap();
        assert_eq!(player.name, "Ahmed Khan");
        assert_eq!(player.total_visits, 0);

        let found = directory.resolve(TENANT, "ahmed khan").unwrap().unwrap();
        assert_eq!(found.id, player.id);
        assert!(directory.resolve(TENANT, "Ahmed").unwrap().is_none());
    }

    #[test]
    fn test_update_and_delete() {
        let directory = service();
        let player = directory
            .create(
                TENANT,
                PlayerCreate {
                    name: "Bilal".to_string(),
                    phone: "0301-0000000".to_string(),
                    membership: MembershipType::Regular,
                },
            )
            .unwrap();

        let updated = directory
            .update(
                TENANT,
                &player.id,
                PlayerUpdate {
                    name: None,
                    phone: Some("0302-9999999".to_string()),
                    membership: Some(MembershipType::Premium),
                },
            )
            .unwrap();
        assert_eq!(updated.phone, "0302-9999999");
        assert_eq!(updated.membership, MembershipType::Premium);

        assert!(directory.delete(TENANT, &player.id).unwrap());
        assert_eq!(
            directory.delete(TENANT, &player.id).unwrap_err().code,
            ErrorCode::PlayerNotFound
        );
    }
}
