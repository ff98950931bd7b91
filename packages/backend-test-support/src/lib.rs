//! Helpers shared by the backend's integration tests: logging setup and a
//! small fixture dictionary.

pub mod logging;
pub mod words;
