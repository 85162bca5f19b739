// Copyright © 2024 Stephan Kunz

//! The `temporal` specific error enum `TemporalError` together with a type alias for [`std::result::Result`] to write only `Result<T>`.
//!

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;
// endregion:	--- types

// region:    --- TemporalError
/// `temporal` Error type
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum TemporalError {
	/// Invalid `TimerState`
	#[error("invalid TimerState {0}")]
	TimerState(String),
	/// Rendering a time pattern failed
	#[error("formatting time with pattern '{pattern}' failed")]
	Format {
		/// the pattern that could not be rendered
		pattern: String,
	},

	// should be last line
	/// auto conversion for boxed `std::error::Error`
	#[error(transparent)]
	StdError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
} // endregion: --- TemporalError
