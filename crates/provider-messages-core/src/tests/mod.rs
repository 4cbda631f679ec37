// crates/provider-messages-core/src/tests/mod.rs
// ============================================================================
// Module: Core Unit Tests
// Description: Crate-internal tests for formatting and bundled catalogs.
// Purpose: Exercise formatter behavior and catalog parity with private access.
// Dependencies: crate modules, tracing-test
// ============================================================================

//! Unit tests for provider-messages-core.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod bundled;
mod formatter;
