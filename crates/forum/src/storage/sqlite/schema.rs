//! SQLite schema definitions and SQL query constants.

/// SQL statement to create the posts table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    published INTEGER NOT NULL DEFAULT 1,
    author_id INTEGER,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_posts_published ON posts(published);
"#;

pub const INSERT_POST: &str = r#"
INSERT INTO posts (title, content, published, author_id, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_PUBLISHED: &str = r#"
SELECT id, title, content, published, author_id, created_at
FROM posts
WHERE published = 1
ORDER BY id DESC
"#;

pub const SELECT_POST_BY_ID: &str = r#"
SELECT id, title, content, published, author_id, created_at
FROM posts
WHERE id = ?1
"#;

pub const DELETE_POST: &str = r#"
DELETE FROM posts WHERE id = ?1
"#;
