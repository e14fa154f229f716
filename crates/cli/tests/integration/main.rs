//! CLI integration tests, one module per command family.

mod apply_tests;
mod common;
mod inspect_tests;
