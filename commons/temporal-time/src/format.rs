// Copyright © 2024 Stephan Kunz

//! Module `format` renders points in time with a strftime like pattern.
//!
//! All directives known to [`chrono::format::strftime`] are supported,
//! additionally `%MS` is replaced by the zero padded milliseconds of the current second.
//! Unknown directives are kept as literal text.

// region:		--- modules
use chrono::{
	format::{Item, StrftimeItems},
	DateTime, Local, TimeZone, Timelike,
};
use core::fmt::{Display, Write};
use temporal_core::error::{Result, TemporalError};
use tracing::debug;
// endregion:	--- modules

// region:		--- constants
/// directive for milliseconds
const MILLIS_DIRECTIVE: &str = "MS";
/// longest chrono directive including `%`, e.g. `%::z` or `%.3f`
const MAX_DIRECTIVE_LEN: usize = 5;
// endregion:	--- constants

// region:		--- functions
/// Render the current local time using `pattern`.
/// ```
/// # use temporal_time::format_time;
/// # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
/// let date = format_time("%d/%m/%y")?;        // e.g. "30/09/20"
/// let time = format_time("%H:%M:%S:%MS")?;    // e.g. "12:51:59:331"
/// assert_eq!(date.len(), 8);
/// assert_eq!(time.len(), 12);
/// # Ok(())
/// # }
/// ```
/// # Errors
/// if rendering the pattern fails
pub fn format_time(pattern: &str) -> Result<String> {
	format_time_at(pattern, &Local::now())
}

/// Render the given `datetime` using `pattern`, offset related directives use its time zone.
/// # Errors
/// if rendering the pattern fails
pub fn format_time_at<Tz>(pattern: &str, datetime: &DateTime<Tz>) -> Result<String>
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	// leap seconds are reported with nanoseconds beyond one second
	let millis = (datetime.nanosecond() % 1_000_000_000) / 1_000_000;
	let translated = translate(pattern, millis);

	let mut result = String::with_capacity(pattern.len() * 2);
	write!(
		result,
		"{}",
		datetime.format_with_items(StrftimeItems::new(&translated))
	)
	.map_err(|_| TemporalError::Format {
		pattern: pattern.into(),
	})?;
	Ok(result)
}

/// Translate a pattern into a valid chrono pattern
/// by inserting the milliseconds and escaping unknown directives.
fn translate(pattern: &str, millis: u32) -> String {
	let chars: Vec<char> = pattern.chars().collect();
	let mut result = String::with_capacity(pattern.len() + 4);
	let mut pos = 0;
	while pos < chars.len() {
		let c = chars[pos];
		if c != '%' {
			result.push(c);
			pos += 1;
			continue;
		}

		let rest: String = chars[pos + 1..].iter().collect();
		if rest.starts_with(MILLIS_DIRECTIVE) {
			result.push_str(&format!("{millis:03}"));
			pos += 1 + MILLIS_DIRECTIVE.len();
			continue;
		}

		let longest = MAX_DIRECTIVE_LEN.min(chars.len() - pos);
		let directive = (2..=longest)
			.map(|len| chars[pos..pos + len].iter().collect::<String>())
			.find(|candidate| is_directive(candidate));
		if let Some(directive) = directive {
			pos += directive.chars().count();
			result.push_str(&directive);
		} else {
			debug!("unknown directive at position {pos} in '{pattern}', kept as text");
			result.push_str("%%");
			pos += 1;
		}
	}
	result
}

/// Checks whether `candidate` is exactly one valid chrono directive
fn is_directive(candidate: &str) -> bool {
	let mut items = StrftimeItems::new(candidate);
	matches!(items.next(), Some(item) if !matches!(item, Item::Error)) && items.next().is_none()
}
// endregion:	--- functions
