//! Command implementations for the fsprovider CLI

pub mod completions;
pub mod load;
pub mod targets;
pub mod version;
