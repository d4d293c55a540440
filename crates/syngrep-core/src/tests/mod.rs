//! Unit tests for `syngrep_core` types.

mod config_tests;
mod label_tests;
mod match_tests;
