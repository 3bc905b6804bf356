//! Request handlers, grouped the way the live backend groups its apps.
//!
//! Handlers read and write the shared [`crate::state::MockDb`] and map
//! missing records and contract violations via [`crate::error::MockError`].

pub mod catalog;
pub mod characters;
pub mod gamification;
pub mod ticktick;
