pub mod game_setup;
pub mod logging;
