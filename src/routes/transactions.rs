//! Loan lifecycle endpoints: issue, return, inspect and delete transactions.

use axum::{
    extract::State,
    response::Redirect,
    Json,
};

use crate::{
    error::{AppResult, OptionExt},
    middleware::{EntityId, ValidatedForm},
    state::AppState,
    types::{IssueForm, ReturnForm, TransactionDto},
};

pub async fn list_transactions(State(state): State<AppState>) -> AppResult<Json<Vec<TransactionDto>>> {
    let transactions = state.repo.transactions.list().await?;
    Ok(Json(transactions.into_iter().map(TransactionDto::from).collect()))
}

/// Issue a book. Availability is neither checked nor changed.
pub async fn issue_book(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<IssueForm>,
) -> AppResult<Redirect> {
    let id = state.repo.transactions.issue(&form).await?;
    state.metrics.inc_loans_issued();
    tracing::info!(
        transaction_id = id,
        book_id = form.book_id,
        member_id = form.member_id,
        issue_date = %form.issue_date,
        "Book issued"
    );
    Ok(Redirect::to("/transactions"))
}

pub async fn edit_transaction(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<TransactionDto>> {
    let transaction = state.repo.transactions.get(id).await?.ok_or_not_found("transaction")?;
    Ok(Json(transaction.into()))
}

/// Return a book by setting the transaction's return date.
pub async fn return_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedForm(form): ValidatedForm<ReturnForm>,
) -> AppResult<Redirect> {
    let returned = state.repo.transactions.return_loan(id, form.return_date).await?;
    if returned == 0 {
        tracing::debug!(transaction_id = id, "Return matched no transaction");
    } else {
        state.metrics.inc_loans_returned();
        tracing::info!(transaction_id = id, return_date = %form.return_date, "Book returned");
    }
    Ok(Redirect::to("/transactions"))
}

pub async fn delete_transaction(State(state): State<AppState>, EntityId(id): EntityId) -> AppResult<Redirect> {
    let deleted = state.repo.transactions.delete(id).await?;
    state.metrics.add_deleted(deleted);
    if deleted > 0 {
        tracing::info!(transaction_id = id, "Transaction deleted");
    }
    Ok(Redirect::to("/transactions"))
}
