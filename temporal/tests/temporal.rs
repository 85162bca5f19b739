// Copyright © 2024 Stephan Kunz

//! Wall clock scenarios, tolerances cover scheduling jitter

use std::{thread::sleep, time::Duration};
use temporal::prelude::*;

const TOLERANCE: i64 = 100;

fn assert_near(value: i64, expected: i64) {
	assert!(
		value >= expected && value <= expected + TOLERANCE,
		"{value}ms is not near {expected}ms"
	);
}

#[test]
fn starts_at_zero() {
	temporal::init_tracing();
	let temporal = Temporal::new();
	assert!(temporal.get_time() < 5);
	assert_eq!(temporal.state(), TimerState::Running);
}

#[test]
fn stopped_does_not_drift() {
	let mut temporal = Temporal::new();
	sleep(Duration::from_millis(10));
	temporal.stop();
	let first = temporal.get_time();
	sleep(Duration::from_millis(20));
	assert_eq!(temporal.get_time(), first);
	assert_eq!(temporal.get_time(), first);
}

#[test]
fn running_is_monotonic() {
	let temporal = Temporal::new();
	let mut last = temporal.get_time();
	for _ in 0..20 {
		sleep(Duration::from_millis(1));
		let now = temporal.get_time();
		assert!(now >= last);
		last = now;
	}
}

#[test]
fn only_last_interval_since_running() {
	let mut temporal = Temporal::new();
	sleep(Duration::from_millis(2_000));
	temporal.stop();
	temporal.resume();
	sleep(Duration::from_millis(1_000));
	assert_near(temporal.get_time_since_running(), 1_000);
	assert_near(temporal.get_time(), 3_000);
}

#[test]
fn accumulates_two_intervals() {
	let mut temporal = Temporal::new();
	sleep(Duration::from_millis(500));
	temporal.stop();
	assert_near(temporal.get_time(), 500);
	sleep(Duration::from_millis(200));
	temporal.resume();
	sleep(Duration::from_millis(500));
	temporal.stop();
	assert_near(temporal.get_time(), 1_000);
	assert_near(temporal.get_time_since_running(), 500);
	temporal.destroy();
}

#[test]
fn diff_of_stopped() {
	let mut first = Temporal::new();
	sleep(Duration::from_millis(100));
	let mut second = Temporal::new();
	sleep(Duration::from_millis(50));
	first.stop();
	second.stop();
	assert_eq!(diff(&first, &second), second.get_time() - first.get_time());
	assert!(diff(&first, &second) < 0);
	assert_eq!(Temporal::diff(&second, &first), -diff(&first, &second));
}

#[test]
fn formats_now() -> Result<()> {
	let text = format_time("%d/%m/%y %H:%M:%S:%MS")?;
	let parts: Vec<&str> = text.split([' ', '/', ':']).collect();
	assert_eq!(parts.len(), 7);
	assert!(parts[..6].iter().all(|part| part.len() == 2));
	assert_eq!(parts[6].len(), 3);
	Ok(())
}
