//! Bookmark persistence adapter.
//!
//! Implements `BookmarkStoreTrait` — the five logical storage operations
//! (list, get-by-id, insert, update, delete), backed by SQLite via
//! `rusqlite`. This layer is a pure pass-through to storage: no validation
//! or sanitization happens here.

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::StoreError;

/// Trait defining the bookmark storage operations.
pub trait BookmarkStoreTrait {
    /// All records, in storage-native (insertion) order.
    fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;
    /// The matching record, or `None` if no row has that id.
    fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError>;
    /// Inserts a record, assigning its id. Returns the persisted record.
    fn insert(&mut self, new: &NewBookmark) -> Result<Bookmark, StoreError>;
    /// Writes only the supplied fields. Returns the affected-row count (0 or 1).
    fn update(&mut self, id: &str, patch: &BookmarkPatch) -> Result<usize, StoreError>;
    /// Removes a record permanently. Returns the affected-row count (0 or 1).
    fn delete(&mut self, id: &str) -> Result<usize, StoreError>;
}

/// Bookmark store backed by a SQLite connection.
pub struct BookmarkStore<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a new `BookmarkStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            rating: row.get(3)?,
            description: row.get(4)?,
        })
    }
}

impl<'a> BookmarkStoreTrait for BookmarkStore<'a> {
    fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, url, rating, description FROM bookmarks ORDER BY rowid")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_bookmark)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(results)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        match self.conn.query_row(
            "SELECT id, title, url, rating, description FROM bookmarks WHERE id = ?1",
            params![id],
            Self::row_to_bookmark,
        ) {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e.to_string())),
        }
    }

    fn insert(&mut self, new: &NewBookmark) -> Result<Bookmark, StoreError> {
        let id = Uuid::new_v4().to_string();

        self.conn
            .query_row(
                "INSERT INTO bookmarks (id, title, url, rating, description) \
                 VALUES (?1, ?2, ?3, ?4, ?5) \
                 RETURNING id, title, url, rating, description",
                params![id, new.title, new.url, new.rating, new.description],
                Self::row_to_bookmark,
            )
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn update(&mut self, id: &str, patch: &BookmarkPatch) -> Result<usize, StoreError> {
        // Build the SET clause from the supplied fields only
        let mut sets: Vec<String> = Vec::new();
        let mut values: Vec<&dyn rusqlite::ToSql> = Vec::new();

        if let Some(title) = &patch.title {
            values.push(title);
            sets.push(format!("title = ?{}", values.len()));
        }
        if let Some(url) = &patch.url {
            values.push(url);
            sets.push(format!("url = ?{}", values.len()));
        }
        if let Some(rating) = &patch.rating {
            values.push(rating);
            sets.push(format!("rating = ?{}", values.len()));
        }
        if let Some(description) = &patch.description {
            values.push(description);
            sets.push(format!("description = ?{}", values.len()));
        }

        if sets.is_empty() {
            return Ok(0);
        }

        values.push(&id);
        let sql = format!(
            "UPDATE bookmarks SET {} WHERE id = ?{}",
            sets.join(", "),
            values.len()
        );

        self.conn
            .execute(&sql, &values[..])
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn delete(&mut self, id: &str) -> Result<usize, StoreError> {
        self.conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
