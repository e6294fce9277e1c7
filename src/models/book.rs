//! Book model and form payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book row from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Form payload for creating or updating a book
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
}
