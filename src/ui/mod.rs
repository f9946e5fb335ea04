//! Terminal user interface for the employee directory.
//!
//! [`app_component::AppComponent`] is the root of the component tree; the
//! event loop lives in [`renderer`].

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
