//! Input module: Symbolic keys and terminal event decoding.
//!
//! - [`Key`]: the logical key tokens widgets handle
//! - [`decode_event`]: crossterm event to [`Decoded`] conversion

mod decoder;
mod key;

pub use decoder::{decode_event, Decoded};
pub use key::Key;
