//! Client (library patron) model and form payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client row from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Form payload for creating or updating a client
#[derive(Debug, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
}
