//! User-facing text.
//!
//! Every line the CLI prints is a [`Message`] variant; its wording lives in
//! `display.rs` and the output routing in `macros.rs`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
