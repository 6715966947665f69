//! Shared types for the product configurator: the option catalog, the
//! selection state machine and the order payload handed to the backend.

pub mod domain;
pub mod enums;
