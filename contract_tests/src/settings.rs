//! Settings document contract tests
