//! Widget module: The focusable and passive elements of a container.
//!
//! - [`Widget`]: the capability trait every element implements
//! - [`TextField`]: single-line editing state machine
//! - [`TextInput`], [`Menu`], [`Button`]: interactive widgets
//! - [`Progress`], [`Message`], [`RawLines`]: passive widgets

mod button;
mod field;
mod menu;
mod message;
mod progress;
mod text_input;
mod traits;

pub use button::{Button, ButtonCallback};
pub use field::TextField;
pub use menu::{Menu, MenuOption, FILTER_PROMPT, NO_RESULTS};
pub use message::{Message, RawLines};
pub use progress::{LogLine, Progress, ProgressConfig, CANCELLED_SUFFIX};
pub use text_input::{TextInput, REQUIRED_MESSAGE};
pub use traits::{CursorOffset, KeyOutcome, RenderContext, Validity, Widget, WidgetKind};
