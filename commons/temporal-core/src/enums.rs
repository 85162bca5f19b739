// Copyright © 2024 Stephan Kunz

//! Core enums of `temporal`
//!

// region:		--- modules
use crate::error::{Result, TemporalError};
use std::fmt::Display;
// endregion:	--- modules

// region:		--- TimerState
/// The states a temporal variable can take
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum TimerState {
	/// Time is not counted
	Stopped,
	/// Time is counted
	#[default]
	Running,
}

impl TryFrom<&str> for TimerState {
	type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

	fn try_from(value: &str) -> Result<Self> {
		let v = value.to_lowercase();
		match v.as_str() {
			"stopped" => Ok(Self::Stopped),
			"running" => Ok(Self::Running),
			_ => Err(TemporalError::TimerState(value.to_string()).into()),
		}
	}
}

impl Display for TimerState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Stopped => write!(f, "Stopped"),
			Self::Running => write!(f, "Running"),
		}
	}
}
// endregion:	--- TimerState

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<TimerState>();
	}

	#[test]
	fn default_is_running() {
		assert_eq!(TimerState::default(), TimerState::Running);
	}

	#[test]
	fn parse_and_display() -> Result<()> {
		assert_eq!(TimerState::try_from("Stopped")?, TimerState::Stopped);
		assert_eq!(TimerState::try_from("RUNNING")?, TimerState::Running);
		assert!(TimerState::try_from("paused").is_err());
		for state in [TimerState::Stopped, TimerState::Running] {
			assert_eq!(TimerState::try_from(state.to_string().as_str())?, state);
		}
		Ok(())
	}
}
