//! CLI command implementations.

pub mod resolve;
pub mod sources;
pub mod version;
