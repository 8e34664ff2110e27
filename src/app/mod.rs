//! Application Layer
//!
//! The demo window: app initialization, the shared form entity and the form layout.

pub mod application;
pub mod demo_form;
pub mod entities;
pub mod workspace;
