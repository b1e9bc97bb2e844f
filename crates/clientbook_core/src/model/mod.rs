//! Domain model for persisted client records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage and callers.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `ClientId`.
//! - Field values are carried verbatim; the model performs no normalization.

pub mod client;
