//! Match span contract tests
//!
//! The search side hands over matches as `[[start, len], ...]`.
