//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for client records.
//! - Isolate SQLite query details from calling code.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Repositories borrow their connection; opening and closing the handle is
//!   the caller's job.

pub mod client_repo;
