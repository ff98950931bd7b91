pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{GameConfig, TurnPolicy};
pub use domain::{Command, CommandOutcome, Lexicon, TurnInfo, WordList};
pub use error::AppError;
pub use errors::DomainError;
pub use services::{GameMaster, RoomRegistry, TickEvent};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
