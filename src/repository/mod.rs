//! Repository layer for database operations.
//!
//! Every method borrows a connection from the pool for the length of its
//! statements only; sqlx hands it back on drop, including on error paths.

pub mod books;
pub mod members;
pub mod transactions;

use sqlx::SqlitePool;

use crate::config::ReferencePolicy;
use crate::error::{AppError, AppResult};

/// One repository per table, all sharing the same pool.
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub transactions: transactions::TransactionsRepository,
}

impl Repository {
    pub fn new(pool: SqlitePool, references: ReferencePolicy) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone(), references),
            members: members::MembersRepository::new(pool.clone(), references),
            transactions: transactions::TransactionsRepository::new(pool, references),
        }
    }
}

/// The `Transactions` column pointing at a book or member row.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LoanReference {
    Book,
    Member,
}

impl LoanReference {
    fn label(self) -> &'static str {
        match self {
            LoanReference::Book => "book",
            LoanReference::Member => "member",
        }
    }

    fn count_sql(self) -> &'static str {
        match self {
            LoanReference::Book => "SELECT COUNT(*) FROM Transactions WHERE BookID = ?1",
            LoanReference::Member => "SELECT COUNT(*) FROM Transactions WHERE MemberID = ?1",
        }
    }

    fn cascade_sql(self) -> &'static str {
        match self {
            LoanReference::Book => "DELETE FROM Transactions WHERE BookID = ?1",
            LoanReference::Member => "DELETE FROM Transactions WHERE MemberID = ?1",
        }
    }
}

/// Deletes a book or member row according to `policy`.
///
/// Runs in one store transaction; an early return drops `tx`, which rolls back.
/// Returns the number of deleted rows of the target table (0 when absent).
pub(crate) async fn delete_referenced(
    pool: &SqlitePool,
    policy: ReferencePolicy,
    reference: LoanReference,
    delete_sql: &str,
    id: i64,
) -> AppResult<u64> {
    let mut tx = pool.begin().await?;

    match policy {
        ReferencePolicy::Ignore => {}
        ReferencePolicy::Restrict => {
            let loans: i64 = sqlx::query_scalar(reference.count_sql()).bind(id).fetch_one(&mut *tx).await?;
            if loans > 0 {
                return Err(AppError::Conflict(format!(
                    "{} {} is referenced by {} transaction(s)",
                    reference.label(),
                    id,
                    loans
                )));
            }
        }
        ReferencePolicy::Cascade => {
            let removed = sqlx::query(reference.cascade_sql()).bind(id).execute(&mut *tx).await?.rows_affected();
            if removed > 0 {
                tracing::debug!("Cascading delete of {} {} removed {} transaction(s)", reference.label(), id, removed);
            }
        }
    }

    let deleted = sqlx::query(delete_sql).bind(id).execute(&mut *tx).await?.rows_affected();
    tx.commit().await?;
    Ok(deleted)
}
