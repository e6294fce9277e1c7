//! Loan management endpoints

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoanForm, UpdateLoanForm},
    views, AppState,
};

/// Render the loan listing page, joined with client names and book titles
pub async fn manage_loans(State(state): State<AppState>) -> AppResult<Html<String>> {
    let loans = state.repository.loans.list_with_details().await?;
    Ok(Html(views::loans_page(&loans)))
}

/// Create a loan from form fields and redirect back to the listing.
///
/// The submitted client and book ids are not checked for existence.
pub async fn create_loan(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<CreateLoanForm>, AppError>,
) -> AppResult<Redirect> {
    state.repository.loans.create(&form).await?;
    Ok(Redirect::to("/manage_loans"))
}

/// Update a loan by id, overwriting all four fields. Recording a return is
/// an update with a non-empty `return_date`.
pub async fn update_loan(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<UpdateLoanForm>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.loans.update(id, &form).await?;
    if affected == 0 {
        tracing::debug!(id, "loan update matched no rows");
    }
    Ok(Redirect::to("/manage_loans"))
}

/// Delete a loan by id; a non-existent id is a no-op
pub async fn delete_loan(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Redirect> {
    let affected = state.repository.loans.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "loan delete matched no rows");
    }
    Ok(Redirect::to("/manage_loans"))
}
