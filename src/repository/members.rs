//! Members repository

use sqlx::SqlitePool;

use super::{delete_referenced, LoanReference};
use crate::{
    config::ReferencePolicy,
    error::AppResult,
    types::{Member, MemberForm},
};

const LIST_SQL: &str = r#"SELECT MemberID AS id, Name AS name, Contact AS contact, MembershipDate AS membership_date
FROM Members ORDER BY MemberID"#;

const GET_SQL: &str = r#"SELECT MemberID AS id, Name AS name, Contact AS contact, MembershipDate AS membership_date
FROM Members WHERE MemberID = ?1"#;

#[derive(Clone)]
pub struct MembersRepository {
    pool: SqlitePool,
    references: ReferencePolicy,
}

impl MembersRepository {
    pub fn new(pool: SqlitePool, references: ReferencePolicy) -> Self {
        Self { pool, references }
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(LIST_SQL).fetch_all(&self.pool).await?;
        Ok(members)
    }

    /// Insert a member. A contact that is already registered is a constraint violation.
    pub async fn create(&self, member: &MemberForm) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO Members (Name, Contact, MembershipDate) VALUES (?1, ?2, ?3)")
            .bind(&member.name)
            .bind(&member.contact)
            .bind(member.membership_date)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(GET_SQL).bind(id).fetch_optional(&self.pool).await?;
        Ok(member)
    }

    pub async fn update(&self, id: i64, member: &MemberForm) -> AppResult<u64> {
        let result = sqlx::query("UPDATE Members SET Name = ?1, Contact = ?2, MembershipDate = ?3 WHERE MemberID = ?4")
            .bind(&member.name)
            .bind(&member.contact)
            .bind(member.membership_date)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        delete_referenced(
            &self.pool,
            self.references,
            LoanReference::Member,
            "DELETE FROM Members WHERE MemberID = ?1",
            id,
        )
        .await
    }
}
