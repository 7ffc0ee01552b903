//! # Tiller
//!
//! A Model-View-Update runtime for terminal applications.
//!
//! Tiller turns a raw terminal into a message-driven application host: an
//! incremental ANSI/VT input decoder, a concurrent actor runtime with a
//! strictly sequential update loop, and a crash-safe terminal lifecycle that
//! restores the user's session on every exit path.
//!
//! ## Core Concepts
//!
//! - **Component**: `init`/`update`/`view`/`subscriptions`, pure over an
//!   immutable model
//! - **Message bus**: one unbounded channel, many producers, one consumer
//! - **Snapshots**: actors read lock-free state snapshots; only the update
//!   loop writes
//! - **Session**: terminal modes acquired with rollback, released
//!   idempotently, backstopped by `Drop`
//!
//! ## Example
//!
//! ```rust,ignore
//! use tiller::{Component, Cmd, Program, TextRenderer};
//!
//! struct Counter;
//!
//! impl Component for Counter {
//!     type Model = i64;
//!     type Msg = i64;
//!     type View = String;
//!
//!     fn init(&self) -> (i64, Vec<Cmd<i64>>) {
//!         (0, Vec::new())
//!     }
//!
//!     fn update(&self, msg: i64, model: &i64) -> (i64, Vec<Cmd<i64>>) {
//!         (model + msg, Vec::new())
//!     }
//!
//!     fn view(&self, model: &i64) -> String {
//!         format!("count: {model}")
//!     }
//! }
//!
//! Program::new(Counter).run(TextRenderer::new())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod component;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod runtime;
pub mod terminal;

// Re-exports for convenience
pub use component::{Cmd, Component, Sub, SubSink, SystemEvent};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use input::{Decoder, InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use render::{NullRenderer, Renderer, TextRenderer};
pub use runtime::{Program, RuntimeHandle, RuntimeState, SystemMsg};
pub use terminal::{CrosstermBackend, TerminalBackend, TerminalSession};
