// Copyright © 2024 Stephan Kunz

//! Helper functions
//!

// region:		--- modules
use std::time::Duration;
// endregion:	--- modules

// region:		--- functions
/// Convert a [`Duration`] into whole milliseconds.
/// Values beyond `i64::MAX` milliseconds saturate.
#[must_use]
pub fn as_millis(duration: Duration) -> i64 {
	i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
// endregion:	--- functions

// region:    --- Tracing
/// Initialize tracing
pub fn init_tracing() {
	let subscriber = tracing_subscriber::fmt()
		//.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_thread_names(true)
		.with_level(true)
		.with_target(true);

	let subscriber = subscriber.finish();
	let _ = tracing::subscriber::set_global_default(subscriber);
}
// endregion: --- Tracing
