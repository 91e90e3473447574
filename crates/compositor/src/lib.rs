//! # Flagword Compositor
//!
//! Stacks images top to bottom on a transparent canvas and outlines each one.
//!
//! ```text
//! ┌────────────┐
//! │  image 1   │  y = 0
//! ├────────┐───┘
//! │ image 2│      y = h1
//! ├────────┴──┐
//! │  image 3  │   y = h1 + h2
//! └───────────┘
//! width = max(w), height = sum(h)
//! ```

mod compose;
mod error;

pub use compose::{compose, compose_files, compose_to_file, Layout, BORDER_COLOR};
pub use error::{ComposeError, Result};
