//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod pattern;

pub use pattern::{Pattern, Symbol};
