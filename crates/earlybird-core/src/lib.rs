//! Core library for `earlybird`.
//!
//! Contains the input sanitizer, the name validator, the shared submission
//! state machine, and the signup workflow that ties them to a lead store
//! and a confirmation notifier. This crate depends on `earlybird-store`
//! for the persistence trait and knows nothing about HTTP.

pub mod error;
pub mod notify;
pub mod sanitize;
pub mod session;
pub mod submit;
pub mod validate;
