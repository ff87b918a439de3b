//! Business logic services composed from the data layer.

pub mod auth;
pub mod cascade;
pub mod library;
pub mod stats;
pub mod student;
