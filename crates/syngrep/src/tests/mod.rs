//! Unit tests for the `syngrep` facade.

mod engine_tests;
