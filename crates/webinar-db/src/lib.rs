//! Webinar-DB: Database schema, migrations, and query operations
//!
//! This crate provides database functionality for the webinar backend using
//! SQLite with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use webinar_db::pool::{init_pool, get_conn};
//! use webinar_db::queries::chat;
//!
//! let pool = init_pool("/var/lib/webinar/webinar.db").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let msg = chat::create_message(&conn, "host", "Welcome!", true, None, None).unwrap();
//! println!("Posted message {}", msg.id);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
