//! Command handlers.

pub mod consultation;
