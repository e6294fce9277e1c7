//! HTTP handlers and router for the management pages

pub mod books;
pub mod clients;
pub mod loans;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{views, AppState};

/// Landing page
pub async fn index() -> Html<String> {
    Html(views::index_page())
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Clients
        .route("/manage_clients", get(clients::manage_clients))
        .route("/clients", post(clients::create_client))
        .route("/clients/:id/update", post(clients::update_client))
        .route("/clients/:id/delete", post(clients::delete_client))
        // Books
        .route("/manage_books", get(books::manage_books))
        .route("/books", post(books::create_book))
        .route("/books/:id/update", post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        // Loans
        .route("/manage_loans", get(loans::manage_loans))
        .route("/loans", post(loans::create_loan))
        .route("/loans/:id/update", post(loans::update_loan))
        .route("/loans/:id/delete", post(loans::delete_loan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
