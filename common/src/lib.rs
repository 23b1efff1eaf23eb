//! Types and logic shared by the university directory frontend and its host.
//!
//! Everything here is free of browser and server dependencies so it can be
//! exercised with plain `cargo test`.

pub mod error;
pub mod form;
pub mod model;
pub mod validation;
