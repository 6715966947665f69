//! Product Configurator UI Module
//!
//! - view_model.rs: ViewModel wrapping the selection reducer
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductConfigurator;
pub use view_model::ProductConfiguratorViewModel;
