// Copyright © 2024 Stephan Kunz

//! Core of `temporal`

/// Error handling
pub mod error;
/// Enums
pub mod enums;
/// Traits
pub mod traits;
/// Utilities
pub mod utils;
