//! Acceptance module - client-intake records (create + list).

pub mod handlers;
pub mod models;
