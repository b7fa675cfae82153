//! Text module: Styled text and its measurement.
//!
//! This module contains:
//! - [`Rgb`], [`Modifiers`], [`Style`]: how a run of text looks
//! - [`Span`], [`Line`], [`Block`]: what widgets render into
//! - [`Shape`]: the measured footprint of a block at a terminal width
//! - [`color`]: lighten / blend helpers for animations and log fading

mod line;
mod style;
pub mod color;

pub use line::{Block, Line, Shape, Span};
pub use style::{Modifiers, Rgb, Style};
