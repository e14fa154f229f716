//! Shared utilities.
//!
//! Test helpers for recording patch calls and building portable shell commands.
