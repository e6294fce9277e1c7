//! Book management endpoints

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::book::BookForm,
    views, AppState,
};

/// Render the book listing page
pub async fn manage_books(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.repository.books.list().await?;
    Ok(Html(views::books_page(&books)))
}

/// Create a book from form fields and redirect back to the listing
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<BookForm>, AppError>,
) -> AppResult<Redirect> {
    state.repository.books.create(&form).await?;
    Ok(Redirect::to("/manage_books"))
}

/// Update a book by id; a non-existent id still redirects as a success
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<BookForm>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.books.update(id, &form).await?;
    if affected == 0 {
        tracing::debug!(id, "book update matched no rows");
    }
    Ok(Redirect::to("/manage_books"))
}

/// Delete a book by id; a non-existent id is a no-op
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.books.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "book delete matched no rows");
    }
    Ok(Redirect::to("/manage_books"))
}
