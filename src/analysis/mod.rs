//! Chart transforms.
//!
//! Pure filter/group/count functions over the launch table. Nothing in
//! here holds state: identical inputs always give identical outputs.

pub mod transforms;

pub use transforms::*;
