use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{
    validation::{validate_required, Validate},
    AppResult,
};

// Rows as stored; the SELECTs alias the PascalCase columns to these names.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    pub isbn: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub membership_date: NaiveDate,
}

/// A loan of one book to one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanState {
    Open,
    Closed,
}

impl Transaction {
    pub fn state(&self) -> LoanState {
        match self.return_date {
            Some(_) => LoanState::Closed,
            None => LoanState::Open,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDto {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub state: LoanState,
}

impl From<Transaction> for TransactionDto {
    fn from(transaction: Transaction) -> Self {
        let state = transaction.state();
        Self { transaction, state }
    }
}

// Request forms (application/x-www-form-urlencoded)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author_id: i64,
    pub category_id: i64,
    pub isbn: String,
}

impl Validate for BookForm {
    fn validate(&self) -> AppResult<()> {
        validate_required(&self.title, "title")?;
        validate_required(&self.isbn, "isbn")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub contact: String,
    pub membership_date: NaiveDate,
}

impl Validate for MemberForm {
    fn validate(&self) -> AppResult<()> {
        validate_required(&self.name, "name")?;
        validate_required(&self.contact, "contact")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueForm {
    pub book_id: i64,
    pub member_id: i64,
    pub issue_date: NaiveDate,
}

impl Validate for IssueForm {
    // Presence is guaranteed by the typed fields
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnForm {
    pub return_date: NaiveDate,
}

impl Validate for ReturnForm {
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}
