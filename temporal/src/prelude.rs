// Copyright © 2024 Stephan Kunz

// region:    --- modules
pub use crate::error::{Error, Result};
pub use chrono::{DateTime, FixedOffset, Local};
pub use temporal_core::{enums::TimerState, traits::Clock};
pub use temporal_time::{diff, format_time, format_time_at, Temporal};
// endregion:  --- modules
