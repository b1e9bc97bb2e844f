//! Client domain model.
//!
//! # Responsibility
//! - Define the single record type managed by the repository layer.
//!
//! # Invariants
//! - `id` is assigned by the store on insert; `0` means "not yet persisted".
//! - All text fields are opaque pass-through values; no trimming, no
//!   validation, no format checks happen in this layer.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for a client record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClientId = i64;

/// Canonical persisted record for one registered client.
///
/// The model intentionally keeps `birthday` as text in `YYYYMMDD` form. The
/// store never interprets it as a date; it round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    /// Surrogate key. Ignored on insert, populated on select.
    pub id: ClientId,
    /// Full name, free text.
    pub fio: String,
    /// Login name, free text.
    pub login: String,
    /// Birth date as opaque `YYYYMMDD` text.
    pub birthday: String,
    /// Contact e-mail, free text.
    pub email: String,
}

impl Client {
    /// Creates an unsaved client record.
    ///
    /// # Invariants
    /// - `id` starts at `0` until the store assigns one.
    pub fn new(
        fio: impl Into<String>,
        login: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            fio: fio.into(),
            login: login.into(),
            birthday: birthday.into(),
            email: email.into(),
        }
    }

    /// Returns whether the store has assigned an identifier to this record.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
