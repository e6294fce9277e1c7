//! Books repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::book::{Book, BookForm},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books in storage scan order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Insert a new book and return its assigned id
    pub async fn create(&self, form: &BookForm) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO books (title, author) VALUES (?, ?) RETURNING id",
        )
        .bind(&form.title)
        .bind(&form.author)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite title and author for the matching row; zero rows for a
    /// non-existent id.
    pub async fn update(&self, id: i64, form: &BookForm) -> AppResult<u64> {
        let result = sqlx::query("UPDATE books SET title = ?, author = ? WHERE id = ?")
            .bind(&form.title)
            .bind(&form.author)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete the matching row; a non-existent id affects zero rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
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

    fn form(title: &str, author: &str) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let pool = memory_pool().await.unwrap();
        let repo = BooksRepository::new(pool);

        let id = repo.create(&form("Dune", "Frank Herbert")).await.unwrap();

        let books = repo.list().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, id);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author, "Frank Herbert");
    }

    #[tokio::test]
    async fn update_and_delete_follow_row_counts() {
        let pool = memory_pool().await.unwrap();
        let repo = BooksRepository::new(pool);

        let id = repo.create(&form("Dune", "Frank Herbert")).await.unwrap();

        assert_eq!(
            repo.update(id, &form("Dune Messiah", "Frank Herbert"))
                .await
                .unwrap(),
            1
        );
        assert_eq!(repo.update(9999, &form("x", "y")).await.unwrap(), 0);

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
