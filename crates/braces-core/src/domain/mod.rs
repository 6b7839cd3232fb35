//! Domain layer: the vocabulary of the checker.
//!
//! Nothing in here scans strings; it only describes brackets, the LIFO
//! container the scan uses, and the `YES`/`NO` verdict.

pub mod bracket;
pub mod stack;
pub mod verdict;

pub use bracket::Bracket;
pub use stack::Stack;
pub use verdict::Verdict;
