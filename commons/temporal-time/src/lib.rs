// Copyright © 2024 Stephan Kunz

//! Library implements time related things:
//! a pausable stopwatch called [`Temporal`] and [`format_time`] to render the current time.
//!

// region:    --- modules
mod format;
mod temporal;

// flatten
pub use format::*;
pub use temporal::*;
// endregion: --- modules
