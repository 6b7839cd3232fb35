//! Braces Core - balanced-bracket checking.
//!
//! This crate holds the pure logic behind the `braces` CLI: the bracket
//! domain types, the single-pass checker, and the version banner.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           braces-cli (CLI)              │
//! │   (argument parsing, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │               checker                   │
//! │  (is_balanced, check, classify_all)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │      (Bracket, Stack, Verdict)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use braces_core::{classify_all, is_balanced};
//!
//! assert!(is_balanced("{[]()}"));
//! assert!(!is_balanced("([)]"));
//! assert_eq!(classify_all(["{[]()}", "([)]", ""]), ["YES", "NO", "YES"]);
//! ```

pub mod checker;
pub mod domain;
pub mod error;
pub mod version;

pub use checker::{check, classify_all, is_balanced, verdict, verdicts};
pub use version::{VERSION, print_version, version_banner};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::checker::{check, classify_all, is_balanced, verdict, verdicts};
    pub use crate::domain::{Bracket, Stack, Verdict};
    pub use crate::error::Imbalance;
    pub use crate::version::{VERSION, version_banner};
}
