//! Core UI functionality for the employee directory console.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background directory calls
//!
//! Components implement [`Component`], translate keys into [`Action`]s and
//! forward anything remote to the [`TaskManager`], whose completions come back
//! as actions on the same channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
