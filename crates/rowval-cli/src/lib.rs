//! Shared infrastructure for the rowval CLI binary.

pub mod logging;
