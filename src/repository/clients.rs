//! Clients repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::client::{Client, ClientForm},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: SqlitePool,
}

impl ClientsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all clients in storage scan order
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT id, name, email FROM clients")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    /// Insert a new client and return its assigned id
    pub async fn create(&self, form: &ClientForm) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO clients (name, email) VALUES (?, ?) RETURNING id",
        )
        .bind(&form.name)
        .bind(&form.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite name and email for the matching row.
    ///
    /// A non-existent id affects zero rows and is not an error.
    pub async fn update(&self, id: i64, form: &ClientForm) -> AppResult<u64> {
        let result = sqlx::query("UPDATE clients SET name = ?, email = ? WHERE id = ?")
            .bind(&form.name)
            .bind(&form.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete the matching row; a non-existent id affects zero rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    fn form(name: &str, email: &str) -> ClientForm {
        ClientForm {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let pool = memory_pool().await.unwrap();
        let repo = ClientsRepository::new(pool);

        let id = repo.create(&form("Ada", "ada@x.com")).await.unwrap();

        let clients = repo.list().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, id);
        assert_eq!(clients[0].name, "Ada");
        assert_eq!(clients[0].email, "ada@x.com");
    }

    #[tokio::test]
    async fn update_changes_only_that_row() {
        let pool = memory_pool().await.unwrap();
        let repo = ClientsRepository::new(pool);

        let ada = repo.create(&form("Ada", "ada@x.com")).await.unwrap();
        let bob = repo.create(&form("Bob", "bob@x.com")).await.unwrap();

        let affected = repo
            .update(ada, &form("Ada Lovelace", "lovelace@x.com"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let clients = repo.list().await.unwrap();
        let updated = clients.iter().find(|c| c.id == ada).unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
        let untouched = clients.iter().find(|c| c.id == bob).unwrap();
        assert_eq!(untouched.name, "Bob");
    }

    #[tokio::test]
    async fn update_missing_id_is_a_no_op() {
        let pool = memory_pool().await.unwrap();
        let repo = ClientsRepository::new(pool);

        repo.create(&form("Ada", "ada@x.com")).await.unwrap();

        let affected = repo.update(9999, &form("Ghost", "ghost@x.com")).await.unwrap();
        assert_eq!(affected, 0);

        let clients = repo.list().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Ada");
    }

    #[tokio::test]
    async fn delete_removes_exactly_that_row() {
        let pool = memory_pool().await.unwrap();
        let repo = ClientsRepository::new(pool);

        let ada = repo.create(&form("Ada", "ada@x.com")).await.unwrap();
        let bob = repo.create(&form("Bob", "bob@x.com")).await.unwrap();

        let affected = repo.delete(ada).await.unwrap();
        assert_eq!(affected, 1);

        let clients = repo.list().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, bob);
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_no_op() {
        let pool = memory_pool().await.unwrap();
        let repo = ClientsRepository::new(pool);

        repo.create(&form("Ada", "ada@x.com")).await.unwrap();

        let affected = repo.delete(9999).await.unwrap();
        assert_eq!(affected, 0);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
