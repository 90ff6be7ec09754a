use sqlx::{SqliteConnection, SqlitePool};

/// Per-connection setup, run by the pool for every new connection.
///
/// A failing pragma is logged and the connection is still handed out.
pub async fn configure_connection(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(&mut *conn).await {
        tracing::warn!("Failed to set busy_timeout on new connection: {}", e);
    }
    Ok(())
}

/// Creates the library schema if it is missing.
///
/// Every statement uses `IF NOT EXISTS`, so repeated startups never touch
/// existing rows. The reference columns of `Transactions` are plain integers:
/// the store does not enforce them (see `ReferencePolicy`).
pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance (best-effort)
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS Books (
            BookID INTEGER PRIMARY KEY AUTOINCREMENT,
            Title TEXT NOT NULL,
            AuthorID INTEGER NOT NULL,
            CategoryID INTEGER NOT NULL,
            ISBN TEXT UNIQUE NOT NULL,
            Availability BOOLEAN DEFAULT 1
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS Members (
            MemberID INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            Contact TEXT UNIQUE NOT NULL,
            MembershipDate DATE NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS Transactions (
            TransactionID INTEGER PRIMARY KEY AUTOINCREMENT,
            BookID INTEGER NOT NULL,
            MemberID INTEGER NOT NULL,
            IssueDate DATE NOT NULL,
            ReturnDate DATE
        )"#,
    )
    .execute(pool)
    .await?;

    // Reference lookups (restrict/cascade) scan Transactions by book or member
    let indexes = [
        ("idx_transactions_book", "CREATE INDEX IF NOT EXISTS idx_transactions_book ON Transactions(BookID)"),
        ("idx_transactions_member", "CREATE INDEX IF NOT EXISTS idx_transactions_member ON Transactions(MemberID)"),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            tracing::warn!("Failed to create index {}: {}", name, e);
        }
    }

    Ok(())
}
