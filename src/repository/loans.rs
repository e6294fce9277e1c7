//! Loans repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::loan::{CreateLoanForm, LoanDetails, UpdateLoanForm},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: SqlitePool,
}

impl LoansRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all loans joined with the client name and book title.
    ///
    /// Inner-join semantics: a loan whose client or book row has been
    /// deleted is excluded from the result.
    pub async fn list_with_details(&self) -> AppResult<Vec<LoanDetails>> {
        let loans = sqlx::query_as::<_, LoanDetails>(
            r#"
            SELECT loans.id, loans.client_id, loans.book_id,
                   clients.name AS client_name, books.title AS book_title,
                   loans.loan_date, loans.return_date
            FROM loans
            INNER JOIN clients ON loans.client_id = clients.id
            INNER JOIN books ON loans.book_id = books.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Insert a new loan with no return date. The referenced client and
    /// book ids are stored as submitted, without an existence check.
    pub async fn create(&self, form: &CreateLoanForm) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO loans (client_id, book_id, loan_date) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(form.client_id)
        .bind(form.book_id)
        .bind(&form.loan_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Full overwrite of all four mutable fields. Recording a return is an
    /// update that supplies a non-empty return date.
    pub async fn update(&self, id: i64, form: &UpdateLoanForm) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE loans SET client_id = ?, book_id = ?, loan_date = ?, return_date = ? \
             WHERE id = ?",
        )
        .bind(form.client_id)
        .bind(form.book_id)
        .bind(&form.loan_date)
        .bind(form.return_date_or_null())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the matching row; a non-existent id affects zero rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM loans WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
