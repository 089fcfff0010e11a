//! Game catalog service
//!
//! Named rate definitions the session engine prices tables from. Each tenant
//! gets the stock catalog seeded on first use; operators can add, edit,
//! toggle and delete entries afterwards.

use shared::models::{GameType, GameTypeCreate, GameTypeUpdate, RateUnit};
use shared::{AppError, ErrorCode};

use crate::store::ClubStorage;
use crate::utils::error::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_rate, validate_required_text,
};

/// Marker set once the stock catalog has been written for a tenant
const GAMES_SEEDED_FLAG: &str = "games_seeded";

fn default_game_types() -> Vec<GameType> {
    vec![
        GameType {
            id: "per-hour".to_string(),
            name: "Per Hour".to_string(),
            description: "Charged by time. Timer runs until session ends.".to_string(),
            rate: 200,
            unit: RateUnit::PerHour,
            enabled: true,
            is_default: true,
        },
        GameType {
            id: "full-frame".to_string(),
            name: "Full Frame".to_string(),
            description: "Complete game from start to finish. Fixed price per frame.".to_string(),
            rate: 100,
            unit: RateUnit::PerFrame,
            enabled: true,
            is_default: true,
        },
        GameType {
            id: "6-balls".to_string(),
            name: "6 Balls".to_string(),
            description: "Game played with 6 balls only. Popular quick game.".to_string(),
            rate: 60,
            unit: RateUnit::PerGame,
            enabled: true,
            is_default: true,
        },
        GameType {
            id: "3-balls".to_string(),
            name: "3 Balls".to_string(),
            description: "Quick game with only 3 balls. Fast and popular.".to_string(),
            rate: 40,
            unit: RateUnit::PerGame,
            enabled: true,
            is_default: true,
        },
        GameType {
            id: "1-ball".to_string(),
            name: "1 Ball".to_string(),
            description: "Single ball game. Simplest and cheapest option.".to_string(),
            rate: 20,
            unit: RateUnit::PerGame,
            enabled: false,
            is_default: true,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    storage: ClubStorage,
}

impl CatalogService {
    pub fn new(storage: ClubStorage) -> Self {
        Self { storage }
    }

    /// Seed the stock catalog once per tenant
    ///
    /// The marker keeps operator deletions from resurrecting defaults.
    fn ensure_seeded(&self, tenant: &str) -> AppResult<()> {
        if self.storage.is_flag_set(tenant, GAMES_SEEDED_FLAG)? {
            return Ok(());
        }
        for game in default_game_types() {
            self.storage.put_game_type(tenant, &game)?;
        }
        self.storage.set_flag(tenant, GAMES_SEEDED_FLAG)?;
        tracing::info!(tenant = %tenant, "Seeded default game types");
        Ok(())
    }

    /// Full catalog, stock entries first
    pub fn list(&self, tenant: &str) -> AppResult<Vec<GameType>> {
        self.ensure_seeded(tenant)?;
        let mut games = self.storage.list_game_types(tenant)?;
        games.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(games)
    }

    /// An enabled entry, ready to price a session from
    pub fn find_enabled(&self, tenant: &str, id: &str) -> AppResult<GameType> {
        self.ensure_seeded(tenant)?;
        let game = self
            .storage
            .get_game_type(tenant, id)?
            .ok_or_else(|| AppError::new(ErrorCode::GameTypeNotFound))?;
        if !game.enabled {
            return Err(AppError::with_message(
                ErrorCode::GameTypeDisabled,
                format!("game type '{}' is disabled", game.name),
            ));
        }
        Ok(game)
    }

    pub fn create(&self, tenant: &str, payload: GameTypeCreate) -> AppResult<GameType> {
        self.ensure_seeded(tenant)?;
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(
            &Some(payload.description.clone()),
            "description",
            MAX_NOTE_LEN,
        )?;
        validate_rate(payload.rate)?;

        let game = GameType {
            id: format!("custom-{}", uuid::Uuid::new_v4()),
            name: payload.name.trim().to_string(),
            description: payload.description.trim().to_string(),
            rate: payload.rate,
            unit: payload.unit,
            enabled: payload.enabled,
            is_default: false,
        };
        self.storage.put_game_type(tenant, &game)?;
        tracing::info!(tenant = %tenant, game_type = %game.name, "Game type created");
        Ok(game)
    }

    pub fn update(&self, tenant: &str, id: &str, payload: GameTypeUpdate) -> AppResult<GameType> {
        let mut game = self
            .storage
            .get_game_type(tenant, id)?
            .ok_or_else(|| AppError::new(ErrorCode::GameTypeNotFound))?;

        if let Some(name) = payload.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            game.name = name.trim().to_string();
        }
        if let Some(description) = payload.description {
            validate_optional_text(&Some(description.clone()), "description", MAX_NOTE_LEN)?;
            game.description = description.trim().to_string();
        }
        if let Some(rate) = payload.rate {
            validate_rate(rate)?;
            game.rate = rate;
        }
        if let Some(unit) = payload.unit {
            game.unit = unit;
        }
        if let Some(enabled) = payload.enabled {
            game.enabled = enabled;
        }
        self.storage.put_game_type(tenant, &game)?;
        Ok(game)
    }

    /// Flip an entry's enabled state
    pub fn toggle(&self, tenant: &str, id: &str) -> AppResult<GameType> {
        let mut game = self
            .storage
            .get_game_type(tenant, id)?
            .ok_or_else(|| AppError::new(ErrorCode::GameTypeNotFound))?;
        game.enabled = !game.enabled;
        self.storage.put_game_type(tenant, &game)?;
        Ok(game)
    }

    pub fn delete(&self, tenant: &str, id: &str) -> AppResult<bool> {
        if !self.storage.delete_game_type(tenant, id)? {
            return Err(AppError::new(ErrorCode::GameTypeNotFound));
        }
        tracing::info!(tenant = %tenant, game_type_id = %id, "Game type deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENANT: &str = "ali@club.com";

    fn service() -> CatalogService {
        CatalogService::new(ClubStorage::open_in_memory().unwrap())
    }

    #[test]
    fn test_stock_catalog_seeded_once() {
        let catalog = service();
        let games = catalog.list(TENANT).unwrap();
        assert_eq!(games.len(), 5);
        assert!(games.iter().all(|g| g.is_default));

        // Deleting a default must not resurrect it on the next list
        catalog.delete(TENANT, "1-ball").unwrap();
        assert_eq!(catalog.list(TENANT).unwrap().len(), 4);
    }

    #[test]
    fn test_find_enabled_rejects_missing_and_disabled() {
        let catalog = service();
        catalog.list(TENANT).unwrap();

        let game = catalog.find_enabled(TENANT, "per-hour").unwrap();
        assert_eq!(game.rate, 200);
        assert_eq!(game.unit, RateUnit::PerHour);

        assert_eq!(
            catalog.find_enabled(TENANT, "no-such").unwrap_err().code,
            ErrorCode::GameTypeNotFound
        );
        // "1 Ball" ships disabled
        assert_eq!(
            catalog.find_enabled(TENANT, "1-ball").unwrap_err().code,
            ErrorCode::GameTypeDisabled
        );
    }

    #[test]
    fn test_create_validates_and_assigns_id() {
        let catalog = service();
        let game = catalog
            .create(
                TENANT,
                GameTypeCreate {
                    name: "  Century Challenge ".to_string(),
                    description: "Long-format game".to_string(),
                    rate: 500,
                    unit: RateUnit::PerGame,
                    enabled: true,
                },
            )
            .unwrap();
        assert!(game.id.starts_with("custom-"));
        assert_eq!(game.name, "Century Challenge");
        assert!(!game.is_default);

        let err = catalog
            .create(
                TENANT,
                GameTypeCreate {
                    name: "Bad".to_string(),
                    description: String::new(),
                    rate: 0,
                    unit: RateUnit::PerGame,
                    enabled: true,
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_toggle_flips_enabled() {
        let catalog = service();
        catalog.list(TENANT).unwrap();
        assert!(!catalog.toggle(TENANT, "per-hour").unwrap().enabled);
        assert!(catalog.toggle(TENANT, "per-hour").unwrap().enabled);
    }
}
