//! Filesystem utilities for labrender.
//!
//! Rendered sources are written atomically so a failed run never leaves a
//! truncated file for the build script to compile.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
