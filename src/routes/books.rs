use axum::{
    extract::State,
    response::Redirect,
    Json,
};

use crate::{
    error::{AppResult, OptionExt},
    middleware::{validation::sanitize_for_logging, EntityId, ValidatedForm},
    state::AppState,
    types::{Book, BookForm},
};

pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repo.books.list().await?;
    Ok(Json(books))
}

pub async fn create_book(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<BookForm>,
) -> AppResult<Redirect> {
    let id = state.repo.books.create(&form).await?;
    state.metrics.inc_books_created();
    tracing::info!(book_id = id, isbn = %sanitize_for_logging(&form.isbn), "Book created");
    Ok(Redirect::to("/books"))
}

pub async fn edit_book(State(state): State<AppState>, EntityId(id): EntityId) -> AppResult<Json<Book>> {
    let book = state.repo.books.get(id).await?.ok_or_not_found("book")?;
    Ok(Json(book))
}

pub async fn update_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedForm(form): ValidatedForm<BookForm>,
) -> AppResult<Redirect> {
    let updated = state.repo.books.update(id, &form).await?;
    if updated == 0 {
        tracing::debug!(book_id = id, "Update matched no book");
    } else {
        tracing::info!(book_id = id, "Book updated");
    }
    Ok(Redirect::to("/books"))
}

pub async fn delete_book(State(state): State<AppState>, EntityId(id): EntityId) -> AppResult<Redirect> {
    let deleted = state.repo.books.delete(id).await?;
    state.metrics.add_deleted(deleted);
    if deleted > 0 {
        tracing::info!(book_id = id, "Book deleted");
    }
    Ok(Redirect::to("/books"))
}
