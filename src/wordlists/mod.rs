//! Vocabularies for the guessing game
//!
//! Provides a small embedded demo vocabulary plus a file loader for real
//! dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{WORD_COUNT, WORDS};
