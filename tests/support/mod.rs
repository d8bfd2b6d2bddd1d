// tests/support/mod.rs
// Shared test doubles and helpers used by multiple integration test binaries.
// Individual test crates use different subsets, so allow dead_code here to
// keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
