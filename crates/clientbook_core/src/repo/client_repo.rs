//! Client repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable select/insert/delete APIs over the `clients` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `select_client` is the only operation that reports `NotFound`.
//! - `delete_client` is idempotent; removing an absent row is success.
//! - Field values pass through unmodified in both directions.

use crate::db::DbError;
use crate::model::client::{Client, ClientId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLIENT_SELECT_SQL: &str = "SELECT
    id,
    fio,
    login,
    birthday,
    email
FROM clients";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ClientId),
}

impl RepoError {
    /// Returns whether this error means "no row matches the identifier".
    ///
    /// Callers branch on absence through this helper or by matching the
    /// `NotFound` variant; message text is never part of the contract.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "client not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for client record access.
pub trait ClientRepository {
    fn select_client(&self, id: ClientId) -> RepoResult<Client>;
    fn insert_client(&self, client: &Client) -> RepoResult<ClientId>;
    fn delete_client(&self, id: ClientId) -> RepoResult<()>;
}

/// SQLite-backed client repository.
///
/// Borrows an open connection supplied by the caller; the repository never
/// opens, closes, or reconfigures the handle.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn select_client(&self, id: ClientId) -> RepoResult<Client> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(parse_client_row(row)?);
        }

        Err(RepoError::NotFound(id))
    }

    fn insert_client(&self, client: &Client) -> RepoResult<ClientId> {
        // `client.id` is ignored; the store assigns the surrogate key.
        self.conn.execute(
            "INSERT INTO clients (
                fio,
                login,
                birthday,
                email
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                client.fio.as_str(),
                client.login.as_str(),
                client.birthday.as_str(),
                client.email.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        // Zero affected rows is success; delete carries no existence check.
        self.conn
            .execute("DELETE FROM clients WHERE id = ?1;", params![id])?;

        Ok(())
    }
}

fn parse_client_row(row: &Row<'_>) -> RepoResult<Client> {
    Ok(Client {
        id: row.get("id")?,
        fio: row.get("fio")?,
        login: row.get("login")?,
        birthday: row.get("birthday")?,
        email: row.get("email")?,
    })
}
