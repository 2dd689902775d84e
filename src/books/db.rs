/**
 * Book Model and Database Operations
 *
 * This module handles book records and their database operations.
 * Listing queries join the owner's public fields (username and avatar)
 * onto each row; nothing here ever reads the password hash.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Book struct representing a record in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book ID (UUID)
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// Short review caption
    pub caption: String,
    /// Durable image URL returned by the asset store
    pub image: String,
    /// Rating, 1 to 5 inclusive
    pub rating: i32,
    /// Owning user's ID; immutable after creation
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Owner fields joined onto a listed book
///
/// The public projection of the owning user: username and avatar only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookOwner {
    pub username: String,
    pub profile_image: String,
}

/// Book joined with its owner's public fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookWithOwner {
    pub id: Uuid,
    pub title: String,
    pub caption: String,
    pub image: String,
    pub rating: i32,
    pub user: BookOwner,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn book_with_owner_from_row(row: &sqlx::postgres::PgRow) -> BookWithOwner {
    BookWithOwner {
        id: row.get("id"),
        title: row.get("title"),
        caption: row.get("caption"),
        image: row.get("image"),
        rating: row.get("rating"),
        user: BookOwner {
            username: row.get("username"),
            profile_image: row.get("profile_image"),
        },
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a new book
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` / `caption` - Record text fields
/// * `image` - Durable URL from the asset store
/// * `rating` - Validated rating in 1..=5
/// * `user_id` - Owning user's ID
///
/// # Returns
/// Created book or error
pub async fn create_book(
    pool: &PgPool,
    title: String,
    caption: String,
    image: String,
    rating: i32,
    user_id: Uuid,
) -> Result<Book, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let book = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (id, title, caption, image, rating, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, caption, image, rating, user_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&title)
    .bind(&caption)
    .bind(&image)
    .bind(rating)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// Count all books
pub async fn count_books(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(r#"SELECT COUNT(*) AS total FROM books"#)
        .fetch_one(pool)
        .await?;

    Ok(row.get("total"))
}

/// List books, newest first, with owner fields joined
///
/// # Arguments
/// * `limit` - Page size
/// * `offset` - Rows to skip before the page starts
pub async fn list_books(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<BookWithOwner>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT b.id, b.title, b.caption, b.image, b.rating, b.created_at, b.updated_at,
               u.username, u.profile_image
        FROM books b
        INNER JOIN users u ON b.user_id = u.id
        ORDER BY b.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(book_with_owner_from_row).collect())
}

/// Get a book by ID with owner fields joined
///
/// # Returns
/// Book or None if not found
pub async fn get_book_with_owner(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<BookWithOwner>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT b.id, b.title, b.caption, b.image, b.rating, b.created_at, b.updated_at,
               u.username, u.profile_image
        FROM books b
        INNER JOIN users u ON b.user_id = u.id
        WHERE b.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(book_with_owner_from_row))
}

/// Get a book by ID
///
/// # Returns
/// Book or None if not found
pub async fn get_book(pool: &PgPool, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, caption, image, rating, user_id, created_at, updated_at
        FROM books
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(book)
}

/// List all books owned by a user, newest first
pub async fn list_books_by_owner(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Book>, sqlx::Error> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, caption, image, rating, user_id, created_at, updated_at
        FROM books
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Delete a book by ID
///
/// # Returns
/// Number of rows deleted (0 or 1)
pub async fn delete_book(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM books WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
