//! Browser-hosted WASM walkthrough.
//!
//! This crate is intentionally a stub by default so the workspace builds on
//! native targets without a wasm toolchain. Enable the real app with
//! `--features web` on `wasm32`.
//!
//! Everything host-testable (the slide copy inventory) lives outside the
//! wasm-gated module so `cargo test` exercises it natively.

pub mod slide_copy;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
