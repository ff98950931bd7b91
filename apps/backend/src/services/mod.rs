pub mod game_master;
pub mod rooms;

pub use game_master::{GameMaster, PlacementHandle, PlacementSummary, TickEvent, TurnPhase};
pub use rooms::{Room, RoomRegistry};
