//! Pointer-effect engine for the marketing site front-end.
//!
//! Everything in this crate is platform independent: pointer samples and
//! element bounds come in as plain values, animated state goes out as
//! sampled channel values. The wasm front-end owns the DOM on both sides
//! of that boundary, which keeps this logic testable on the host.

pub mod constants;
pub mod content;
pub mod cursor;
pub mod geometry;
pub mod magnet;
pub mod reveal;
pub mod tween;
