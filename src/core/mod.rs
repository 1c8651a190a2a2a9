//! Core types - pure abstractions shared across the codebase.

mod layer;
mod platform;

pub use layer::{GENERIC_LAYER_CLASS, Layer};
pub use platform::Platform;
