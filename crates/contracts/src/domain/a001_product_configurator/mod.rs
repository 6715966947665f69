//! Product configurator
//!
//! - catalog.rs: static device → manufacturers / specification fields lookup
//! - selection.rs: selection state and its reducer
//! - render.rs: pure visibility and summary derivation
//! - order.rs: payload emitted on submit

pub mod catalog;
pub mod order;
pub mod render;
pub mod selection;

pub use catalog::{FieldDescriptor, FieldKind};
pub use order::{PlaceOrderRequest, SubmittedOrder};
pub use render::FormView;
pub use selection::{Selection, SelectionAction, SelectionError, SelectionStage};
