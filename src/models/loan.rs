//! Loan model and related types
//!
//! Dates travel as free-form text the way the forms submit them;
//! `return_date` is NULL until a return is recorded.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan joined with the client name and book title for the listing page.
///
/// Produced by an inner join: a loan whose client or book has been deleted
/// does not appear here even though its row still exists.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LoanDetails {
    pub id: i64,
    pub client_id: i64,
    pub book_id: i64,
    pub client_name: String,
    pub book_title: String,
    pub loan_date: String,
    pub return_date: Option<String>,
}

/// Form payload for creating a loan
#[derive(Debug, Deserialize)]
pub struct CreateLoanForm {
    pub client_id: i64,
    pub book_id: i64,
    pub loan_date: String,
}

/// Form payload for updating a loan. Every field is resupplied, including
/// `return_date`; recording a return is an update that fills it in.
#[derive(Debug, Deserialize)]
pub struct UpdateLoanForm {
    pub client_id: i64,
    pub book_id: i64,
    pub loan_date: String,
    pub return_date: String,
}

impl UpdateLoanForm {
    /// An empty `return_date` input means the book is still out.
    pub fn return_date_or_null(&self) -> Option<&str> {
        let trimmed = self.return_date.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(return_date: &str) -> UpdateLoanForm {
        UpdateLoanForm {
            client_id: 1,
            book_id: 1,
            loan_date: "2024-01-01".to_string(),
            return_date: return_date.to_string(),
        }
    }

    #[test]
    fn empty_return_date_is_null() {
        assert_eq!(form("").return_date_or_null(), None);
        assert_eq!(form("   ").return_date_or_null(), None);
    }

    #[test]
    fn present_return_date_is_kept() {
        assert_eq!(form("2024-01-10").return_date_or_null(), Some("2024-01-10"));
    }
}
