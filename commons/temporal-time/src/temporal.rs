// Copyright © 2024 Stephan Kunz

//! Module `temporal` provides the [`Temporal`], a stopwatch which can be stopped and resumed.
//! Only time spent in running state is counted, all values are given in milliseconds.

// region:		--- modules
use core::{fmt::Debug, time::Duration};
use std::time::Instant;
use temporal_core::{
	enums::TimerState,
	traits::{Clock, MonotonicClock},
	utils::as_millis,
};
use tracing::{instrument, trace, Level};
// endregion:	--- modules

// region:		--- Temporal
/// A temporal variable.
///
/// Created in [`TimerState::Running`] state.
/// Time accumulates across [`stop`](Temporal::stop) / [`resume`](Temporal::resume) cycles.
pub struct Temporal<C = MonotonicClock>
where
	C: Clock,
{
	clock: C,
	state: TimerState,
	/// sum of all finished intervals
	elapsed: Duration,
	/// the interval finished by the most recent stop
	last_interval: Duration,
	/// begin of the current interval, only meaningful while running
	interval_start: Instant,
}

impl<C> Debug for Temporal<C>
where
	C: Clock,
{
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Temporal")
			.field("state", &self.state)
			.field("elapsed_ms", &self.get_time())
			.finish_non_exhaustive()
	}
}

impl Default for Temporal {
	fn default() -> Self {
		Self::new()
	}
}

impl Temporal {
	/// Constructor for a running [`Temporal`] using the [`MonotonicClock`]
	#[must_use]
	pub fn new() -> Self {
		Self::with_clock(MonotonicClock)
	}
}

impl<C> Temporal<C>
where
	C: Clock,
{
	/// Constructor for a running [`Temporal`] using the given [`Clock`]
	#[must_use]
	pub fn with_clock(clock: C) -> Self {
		let interval_start = clock.now();
		Self {
			clock,
			state: TimerState::Running,
			elapsed: Duration::ZERO,
			last_interval: Duration::ZERO,
			interval_start,
		}
	}

	/// Destroy the [`Temporal`], releasing its resources
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn destroy(self) {
		trace!("destroying temporal after {}ms", self.get_time());
		drop(self);
	}

	/// The current [`TimerState`]
	#[must_use]
	pub const fn state(&self) -> TimerState {
		self.state
	}

	/// Whether time is currently counted
	#[must_use]
	pub fn is_running(&self) -> bool {
		self.state == TimerState::Running
	}

	/// Stop counting time.
	/// Stopping an already stopped [`Temporal`] does nothing.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn stop(&mut self) {
		if self.state == TimerState::Running {
			let interval = self.current_interval();
			self.elapsed = self.elapsed.saturating_add(interval);
			self.last_interval = interval;
			self.state = TimerState::Stopped;
			trace!("stopped after an interval of {:?}", interval);
		}
	}

	/// Resume counting time.
	/// Resuming a running [`Temporal`] does nothing.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn resume(&mut self) {
		if self.state == TimerState::Stopped {
			self.interval_start = self.clock.now();
			self.state = TimerState::Running;
			trace!("resumed with {:?} elapsed", self.elapsed);
		}
	}

	/// Total time counted over all intervals
	#[must_use]
	pub fn elapsed(&self) -> Duration {
		match self.state {
			TimerState::Stopped => self.elapsed,
			TimerState::Running => self.elapsed.saturating_add(self.current_interval()),
		}
	}

	/// Time counted in the current interval if running,
	/// otherwise the length of the interval ended by the last stop
	#[must_use]
	pub fn elapsed_since_running(&self) -> Duration {
		match self.state {
			TimerState::Stopped => self.last_interval,
			TimerState::Running => self.current_interval(),
		}
	}

	/// Total time counted over all intervals in milliseconds
	#[must_use]
	pub fn get_time(&self) -> i64 {
		as_millis(self.elapsed())
	}

	/// Time counted in the latest interval in milliseconds.
	///
	/// After a stop and resume only the time since resuming is returned:
	/// ```
	/// # use temporal_time::Temporal;
	/// # use std::{thread::sleep, time::Duration};
	/// let mut temporal = Temporal::new();
	/// sleep(Duration::from_millis(20));
	/// temporal.stop();
	/// temporal.resume();
	/// sleep(Duration::from_millis(10));
	/// assert!(temporal.get_time_since_running() < temporal.get_time());
	/// ```
	#[must_use]
	pub fn get_time_since_running(&self) -> i64 {
		as_millis(self.elapsed_since_running())
	}

	/// Difference in milliseconds between the total times of two [`Temporal`]s.<br>
	/// `start` should be the one created first, otherwise the result will be negative.
	#[must_use]
	pub fn diff<E>(start: &Self, end: &Temporal<E>) -> i64
	where
		E: Clock,
	{
		end.get_time() - start.get_time()
	}

	fn current_interval(&self) -> Duration {
		self.clock
			.now()
			.saturating_duration_since(self.interval_start)
	}
}

/// Difference in milliseconds between the total times of two [`Temporal`]s,
/// see [`Temporal::diff`]
#[must_use]
pub fn diff<S, E>(start: &Temporal<S>, end: &Temporal<E>) -> i64
where
	S: Clock,
	E: Clock,
{
	Temporal::diff(start, end)
}
// endregion:	--- Temporal
