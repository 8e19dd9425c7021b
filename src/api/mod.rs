//! API clients
//!
//! - `dictionary` - Free Dictionary API (word definitions, phonetics, audio)

pub mod dictionary;

pub use dictionary::{DictionaryClient, DictionaryError};
