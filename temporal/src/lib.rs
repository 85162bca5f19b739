// Copyright © 2024 Stephan Kunz
#![doc = include_str!("../README.md")]
#![crate_type = "lib"]
#![crate_name = "temporal"]
#![warn(missing_docs)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// region:    --- modules
/// Error handling
pub mod error;
/// Public interface of temporal.
/// Typically it is sufficient to include the prelude with
/// `use temporal::prelude::*;`
pub mod prelude;
// endregion: --- modules

// region:    --- exports
pub use temporal_core::{
	enums::TimerState,
	traits::{Clock, MonotonicClock},
	utils::init_tracing,
};
pub use temporal_time::{diff, format_time, format_time_at, Temporal};
// endregion: --- exports
