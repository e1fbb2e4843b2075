//! Interaction cores for crest's custom controls.
//!
//! Each module owns the state machine and geometry math of one control and
//! nothing else: no painting, no toolkit types. The host forwards raw
//! pointer, wheel, and key events (see [`event`]) together with whatever
//! geometry the control needs, and listens for change notifications.
//!
//! The centerpiece is [`range_slider`], a dual-handle slider that resolves
//! ambiguous presses into one of three drag intents and keeps its two
//! values ordered under continuous pointer movement.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod event;
pub mod ip_field;
pub mod paired_button;
pub mod password_field;
pub mod plus_minus_box;
pub mod range_slider;
pub mod scroll_field;
pub mod toggle_switch;
