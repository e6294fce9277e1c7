//! Client management endpoints

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::client::ClientForm,
    views, AppState,
};

/// Render the client listing page
pub async fn manage_clients(State(state): State<AppState>) -> AppResult<Html<String>> {
    let clients = state.repository.clients.list().await?;
    Ok(Html(views::clients_page(&clients)))
}

/// Create a client from form fields and redirect back to the listing
pub async fn create_client(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ClientForm>, AppError>,
) -> AppResult<Redirect> {
    state.repository.clients.create(&form).await?;
    Ok(Redirect::to("/manage_clients"))
}

/// Update a client by id. A non-existent id affects zero rows and still
/// redirects as a success.
pub async fn update_client(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<ClientForm>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.clients.update(id, &form).await?;
    if affected == 0 {
        tracing::debug!(id, "client update matched no rows");
    }
    Ok(Redirect::to("/manage_clients"))
}

/// Delete a client by id; a non-existent id is a no-op
pub async fn delete_client(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.clients.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "client delete matched no rows");
    }
    Ok(Redirect::to("/manage_clients"))
}
