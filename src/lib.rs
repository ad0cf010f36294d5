//! # oldphone - Old Mobile Phone Keypad Decoder
//!
//! Decodes key sequences typed on a classic multi-tap phone keypad into the
//! text they spell out.
//!
//! ## Input format
//!
//! - **Digits** `0`-`9`: pressing a key `n` times in a row selects its `n`-th
//!   character; pressing past the last character keeps the last one
//! - **Space**: pause between two runs of the same key
//! - **`*`**: backspace, removes the last entered character
//! - **`#`**: send, must end the sequence
//!
//! ```
//! assert_eq!(oldphone::decode("4433555 555666#").unwrap(), "HELLO");
//! assert_eq!(oldphone::decode("8 88777444666*664#").unwrap(), "TURING");
//! ```
//!
//! ## Architecture
//!
//! - [`keypad`] - Fixed digit to character layout
//! - [`decoder`] - Validation, run segmentation, edit buffer and decoding
//! - [`report`] - Run-by-run analysis for inspecting a sequence
//! - [`config`] - Command-line defaults
//! - [`error`] - Centralized error types

// Core modules
pub mod error;
pub mod keypad;

// Decoding pipeline
pub mod decoder;
pub mod report;

pub mod config;

// Re-export commonly used types for convenience
pub use error::{DecodeError, Result};

// Public API surface for external usage
pub use decoder::{decode, try_decode, Decoder};
pub use keypad::Keypad;
pub use report::{analyze, Report};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
