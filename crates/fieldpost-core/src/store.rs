//! SQLite-backed store for blogs and posts.
//!
//! A `Store` wraps a single shared connection behind a mutex and is
//! cloned into every request handler; SQLite's own locking provides the
//! rest. All statements are single writes or point reads, so nothing
//! spans a transaction.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::Result;
use crate::model::{Blog, Post};
use crate::schema;

/// Shared handle to the blog database.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (creating if necessary) the database at `path` and bring its
    /// schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        schema::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a new blog with the given password hash, returning the row
    /// with its assigned ID.
    pub fn create_blog(&self, password_hash: &str) -> Result<Blog> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO blogs (created_at, updated_at, password_hash)
             VALUES (?1, ?1, ?2)",
            params![now, password_hash],
        )?;

        Ok(Blog {
            id: conn.last_insert_rowid(),
            created_at: now,
            updated_at: now,
            password_hash: password_hash.to_string(),
        })
    }

    /// Look up a blog by primary key. Soft-deleted rows are invisible.
    pub fn find_blog(&self, id: i64) -> Result<Option<Blog>> {
        let conn = self.conn.lock();
        let blog = conn
            .query_row(
                "SELECT id, created_at, updated_at, password_hash
                 FROM blogs
                 WHERE id = ?1 AND deleted_at IS NULL",
                params![id],
                blog_from_row,
            )
            .optional()?;

        Ok(blog)
    }

    /// Insert a new post linked to `blog_id`. `body` is the already
    /// rendered HTML fragment.
    pub fn create_post(&self, blog_id: i64, body: &str) -> Result<Post> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO posts (created_at, updated_at, blog_id, body)
             VALUES (?1, ?1, ?2, ?3)",
            params![now, blog_id, body],
        )?;

        Ok(Post {
            id: conn.last_insert_rowid(),
            blog_id,
            created_at: now,
            updated_at: now,
            body: body.to_string(),
        })
    }

    /// All posts for a blog, newest first.
    ///
    /// Unbounded by design; there is no pagination anywhere in the
    /// service. The ID tiebreak keeps ordering stable for posts created
    /// within the same second.
    pub fn list_posts(&self, blog_id: i64) -> Result<Vec<Post>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, blog_id, created_at, updated_at, body
             FROM posts
             WHERE blog_id = ?1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC",
        )?;

        let posts = stmt
            .query_map(params![blog_id], post_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(posts)
    }
}

fn blog_from_row(row: &Row) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
        password_hash: row.get(3)?,
    })
}

fn post_from_row(row: &Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        blog_id: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        body: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::open_in_memory().unwrap()
    }

    #[test]
    fn create_and_find_blog() {
        let store = store();
        let blog = store.create_blog("$2b$04$hash").unwrap();
        assert!(blog.id > 0);

        let found = store.find_blog(blog.id).unwrap().unwrap();
        assert_eq!(found.id, blog.id);
        assert_eq!(found.password_hash, "$2b$04$hash");
    }

    #[test]
    fn find_missing_blog_is_none() {
        let store = store();
        assert!(store.find_blog(12345).unwrap().is_none());
    }

    #[test]
    fn blog_ids_are_sequential() {
        let store = store();
        let first = store.create_blog("a").unwrap();
        let second = store.create_blog("b").unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn create_post_links_blog() {
        let store = store();
        let blog = store.create_blog("hash").unwrap();
        let post = store.create_post(blog.id, "<h1>Hi</h1>").unwrap();
        assert_eq!(post.blog_id, blog.id);
        assert_eq!(post.body, "<h1>Hi</h1>");
    }

    #[test]
    fn list_posts_newest_first() {
        let store = store();
        let blog = store.create_blog("hash").unwrap();
        let first = store.create_post(blog.id, "<p>first</p>").unwrap();
        let second = store.create_post(blog.id, "<p>second</p>").unwrap();

        let posts = store.list_posts(blog.id).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, first.id);
    }

    #[test]
    fn list_posts_is_scoped_to_blog() {
        let store = store();
        let mine = store.create_blog("a").unwrap();
        let theirs = store.create_blog("b").unwrap();
        store.create_post(mine.id, "<p>mine</p>").unwrap();
        store.create_post(theirs.id, "<p>theirs</p>").unwrap();

        let posts = store.list_posts(mine.id).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].body, "<p>mine</p>");
    }

    #[test]
    fn list_posts_empty_blog() {
        let store = store();
        let blog = store.create_blog("hash").unwrap();
        assert!(store.list_posts(blog.id).unwrap().is_empty());
    }

    #[test]
    fn soft_deleted_blog_is_invisible() {
        let store = store();
        let blog = store.create_blog("hash").unwrap();
        {
            let conn = store.conn.lock();
            conn.execute(
                "UPDATE blogs SET deleted_at = created_at WHERE id = ?1",
                params![blog.id],
            )
            .unwrap();
        }
        assert!(store.find_blog(blog.id).unwrap().is_none());
    }
}
