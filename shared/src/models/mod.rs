//! Domain models
//!
//! Entity structs plus their Create/Update payloads. Every aggregate is
//! serialized as JSON into the embedded store, keyed by tenant (the club
//! account's email), so all types here are plain serde data.

mod day_stats;
mod game_type;
mod player;
mod profile;
mod session_record;
mod table;

pub use day_stats::DayStats;
pub use game_type::{GameType, GameTypeCreate, GameTypeUpdate, RateUnit};
pub use player::{MembershipType, Player, PlayerCreate, PlayerUpdate};
pub use profile::{ClubAccount, ClubProfile, ClubProfileUpdate};
pub use session_record::{CompletedSession, PaymentMethod, PaymentSplit};
pub use table::{Session, SessionPlayer, Table, TableCreate, TableStatus};
