//! Core data models for the shift validation engine.
//!
//! This module contains the domain models consumed by the validation
//! pipeline: existing shifts supplied as context, and the request describing
//! the candidate interval under validation.

mod request;
mod shift;

pub use request::ShiftRequest;
pub use shift::Shift;
