//! Display pipeline
//!
//! Rendering writes symbols into a [`StagingImage`]; the staging image is
//! encoded through the segment table into a [`DisplayImage`], which is
//! committed to the tick context in one critical section and scanned out
//! by the [`Multiplexer`].

pub mod image;
pub mod multiplex;
pub mod render;
pub mod segments;

pub use image::{Cell, DisplayImage, StagingImage};
pub use multiplex::{Multiplexer, Scan};
pub use render::{render, BlinkFlags, DisplayMode, MESSAGE};
pub use segments::Symbol;
