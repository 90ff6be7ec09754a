//! Loan transactions repository: issue and return of books

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{
    config::ReferencePolicy,
    error::{AppError, AppResult},
    types::{IssueForm, Transaction},
};

const LIST_SQL: &str = r#"SELECT TransactionID AS id, BookID AS book_id, MemberID AS member_id,
       IssueDate AS issue_date, ReturnDate AS return_date
FROM Transactions ORDER BY TransactionID"#;

const GET_SQL: &str = r#"SELECT TransactionID AS id, BookID AS book_id, MemberID AS member_id,
       IssueDate AS issue_date, ReturnDate AS return_date
FROM Transactions WHERE TransactionID = ?1"#;

#[derive(Clone)]
pub struct TransactionsRepository {
    pool: SqlitePool,
    references: ReferencePolicy,
}

impl TransactionsRepository {
    pub fn new(pool: SqlitePool, references: ReferencePolicy) -> Self {
        Self { pool, references }
    }

    pub async fn list(&self) -> AppResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(LIST_SQL).fetch_all(&self.pool).await?;
        Ok(transactions)
    }

    /// Issue a book to a member. The new transaction is open (no return date).
    ///
    /// Neither the book's availability nor other open loans of the same book
    /// are consulted. Existence of book and member is only checked when the
    /// reference policy is not `ignore`; checks and insert share one store
    /// transaction.
    pub async fn issue(&self, loan: &IssueForm) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        if self.references.checks_references() {
            let book: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM Books WHERE BookID = ?1)")
                .bind(loan.book_id)
                .fetch_one(&mut *tx)
                .await?;
            if !book {
                return Err(AppError::NotFound(format!("Book with id {} not found", loan.book_id)));
            }
            let member: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM Members WHERE MemberID = ?1)")
                .bind(loan.member_id)
                .fetch_one(&mut *tx)
                .await?;
            if !member {
                return Err(AppError::NotFound(format!("Member with id {} not found", loan.member_id)));
            }
        }

        let result = sqlx::query("INSERT INTO Transactions (BookID, MemberID, IssueDate) VALUES (?1, ?2, ?3)")
            .bind(loan.book_id)
            .bind(loan.member_id)
            .bind(loan.issue_date)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(GET_SQL).bind(id).fetch_optional(&self.pool).await?;
        Ok(transaction)
    }

    /// Set a transaction's return date.
    ///
    /// Closes an open loan, or corrects the date of a closed one. Unknown ids
    /// are a no-op (`Ok(0)`).
    pub async fn return_loan(&self, id: i64, return_date: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query("UPDATE Transactions SET ReturnDate = ?1 WHERE TransactionID = ?2")
            .bind(return_date)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM Transactions WHERE TransactionID = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
