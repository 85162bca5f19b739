// Copyright © 2024 Stephan Kunz

//! Error handling for `temporal`, re-exported from `temporal-core`
//!

// region:    --- exports
pub use temporal_core::error::{Result, TemporalError as Error};
// endregion: --- exports
