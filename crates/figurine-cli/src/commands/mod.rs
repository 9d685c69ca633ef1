//! CLI command implementations

pub mod export;
pub mod import;
pub mod list;
pub mod lookup;
pub mod play;
pub mod validate;
