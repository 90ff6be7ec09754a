//! Books repository

use sqlx::SqlitePool;

use super::{delete_referenced, LoanReference};
use crate::{
    config::ReferencePolicy,
    error::AppResult,
    types::{Book, BookForm},
};

const LIST_SQL: &str = r#"SELECT BookID AS id, Title AS title, AuthorID AS author_id,
       CategoryID AS category_id, ISBN AS isbn, Availability AS available
FROM Books ORDER BY BookID"#;

const GET_SQL: &str = r#"SELECT BookID AS id, Title AS title, AuthorID AS author_id,
       CategoryID AS category_id, ISBN AS isbn, Availability AS available
FROM Books WHERE BookID = ?1"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
    references: ReferencePolicy,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool, references: ReferencePolicy) -> Self {
        Self { pool, references }
    }

    /// All books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(LIST_SQL).fetch_all(&self.pool).await?;
        Ok(books)
    }

    /// Insert a book; availability takes the column default. Returns the new id.
    pub async fn create(&self, book: &BookForm) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Books (Title, AuthorID, CategoryID, ISBN) VALUES (?1, ?2, ?3, ?4)")
            .bind(&book.title)
            .bind(book.author_id)
            .bind(book.category_id)
            .bind(&book.isbn)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(GET_SQL).bind(id).fetch_optional(&self.pool).await?;
        Ok(book)
    }

    /// Overwrite title, author, category and ISBN. Availability stays as stored.
    /// Returns the number of affected rows (0 for an unknown id).
    pub async fn update(&self, id: i64, book: &BookForm) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE Books SET Title = ?1, AuthorID = ?2, CategoryID = ?3, ISBN = ?4 WHERE BookID = ?5",
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.category_id)
        .bind(&book.isbn)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        delete_referenced(&self.pool, self.references, LoanReference::Book, "DELETE FROM Books WHERE BookID = ?1", id)
            .await
    }
}
