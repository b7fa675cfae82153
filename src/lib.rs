//! # Rivet
//!
//! Inline terminal prompts, menus, forms and progress logs.
//!
//! Rivet draws interactive widgets directly into the scrollback, below
//! whatever the program printed before, and repaints them in place on
//! every keystroke. Nothing takes over the screen: once an interaction is
//! accepted its final state stays printed and the cursor moves on.
//!
//! ## Core Concepts
//!
//! - **Widgets** render themselves to styled lines and report where the
//!   cursor belongs inside that block
//! - **Decorations** (minimal, tagged, bordered, fancy) frame each widget
//!   and correct the cursor position for what they add
//! - **Containers** measure every decorated block at the terminal width,
//!   so the cursor lands on the right cell even when lines wrap
//! - **Backends** supply keys and take bytes; tests drive everything
//!   through a scripted backend
//!
//! ## Example
//!
//! ```rust
//! use rivet::{Form, Key, ScriptedBackend, TaggedStyle, TextInput};
//! use std::rc::Rc;
//!
//! let mut form = Form::new("Login", Rc::new(TaggedStyle::new("rivet")));
//! form.add_input(TextInput::new("Name").with_name("name"))
//!     .add_input(TextInput::new("Password").with_name("password").password(true));
//!
//! let mut backend = ScriptedBackend::new()
//!     .type_text("John")
//!     .press(Key::Enter)
//!     .type_text("secret")
//!     .press(Key::Enter);
//!
//! let data = form.run(&mut backend).unwrap();
//! assert_eq!(data.get("name"), Some("John"));
//! assert_eq!(data.get("password"), Some("secret"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod container;
pub mod error;
pub mod input;
pub mod interrupt;
pub mod style;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use app::{Toolkit, ToolkitConfig};
pub use container::{Container, Form, FormData, Frame, Live, LiveRegion, LogStream, ProgressHandle, RunState};
pub use error::{Error, Result};
pub use input::Key;
pub use interrupt::{InterruptFlag, INTERRUPT_EXIT_CODE};
pub use style::{BorderedConfig, BorderedStyle, Decoration, FancyStyle, MinimalStyle, TaggedConfig, TaggedStyle, Theme};
pub use terminal::{Backend, CrosstermBackend, ScriptedBackend};
pub use text::{Block, Line, Modifiers, Rgb, Span, Style};
pub use widget::{
    Button, CursorOffset, KeyOutcome, Menu, MenuOption, Message, Progress, ProgressConfig, RenderContext, TextInput,
    Validity, Widget, WidgetKind,
};
