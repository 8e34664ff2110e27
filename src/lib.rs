//! Form Widgets
//!
//! Form field widgets for GPUI bound to a shared form store: text, number, masked,
//! radio and select fields, each with a read mode and an edit mode.
//!
//! The interaction rules live in headless engines under [`state`]; [`fields`] wraps
//! them in GPUI views and [`app`] runs a demo window.

pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod i18n;
pub mod state;
pub mod theme;

pub use error::{Error, Result};
