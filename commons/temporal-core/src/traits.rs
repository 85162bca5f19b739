// Copyright © 2024 Stephan Kunz

//! Core traits of `temporal`
//!

// region:		--- modules
use std::{fmt::Debug, time::Instant};
// endregion:	--- modules

// region:		--- Clock
/// Source of monotonic timestamps for timers.
///
/// Implementations must never go backwards.
pub trait Clock: Debug {
	/// The current point in time
	#[must_use]
	fn now(&self) -> Instant;
}

/// The systems monotonic clock, based on [`Instant::now`]
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> Instant {
		(**self).now()
	}
}
// endregion:	--- Clock
