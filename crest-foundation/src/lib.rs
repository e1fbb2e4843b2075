//! Foundation primitives for the crest control crates.
//!
//! This crate is toolkit-free. It provides the physical pixel coordinate
//! types the interaction cores compute with, identity-comparable callback
//! handles for change notification, and a small shared-state handle used to
//! hand one controller to several host hooks.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod px;
pub mod state;

pub use callback::{Callback, CallbackWith};
pub use px::{Px, PxPosition, PxSize};
pub use state::State;
