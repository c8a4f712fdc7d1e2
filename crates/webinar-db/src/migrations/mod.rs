//! Embedded schema migrations.
//!
//! Each migration runs in its own transaction together with the row that
//! records it in `schema_migrations`, so a failed migration leaves neither a
//! half-built schema nor a bookkeeping entry behind.

use std::collections::HashSet;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("failed to read applied migrations: {0}")]
    Bookkeeping(#[from] rusqlite::Error),

    #[error("migration {version} ({name}) failed: {source}")]
    Apply {
        version: u32,
        name: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial",
        sql: include_str!("001_initial.sql"),
    },
    Migration {
        version: 2,
        name: "chat_indexes",
        sql: include_str!("002_chat_indexes.sql"),
    },
];

/// Apply every embedded migration not yet recorded in `schema_migrations`.
///
/// Returns the versions applied by this call, in order.
pub fn run_migrations(conn: &mut Connection) -> Result<Vec<u32>, MigrationError> {
    apply_pending(conn, MIGRATIONS)
}

fn applied_versions(conn: &Connection) -> rusqlite::Result<HashSet<u32>> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )",
    )?;

    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let versions = stmt
        .query_map([], |row| row.get::<_, u32>(0))?
        .collect::<rusqlite::Result<HashSet<_>>>()?;
    Ok(versions)
}

fn apply_pending(
    conn: &mut Connection,
    migrations: &[Migration],
) -> Result<Vec<u32>, MigrationError> {
    let done = applied_versions(conn)?;
    let mut applied = Vec::new();

    for migration in migrations.iter().filter(|m| !done.contains(&m.version)) {
        let fail = |source| MigrationError::Apply {
            version: migration.version,
            name: migration.name,
            source,
        };

        let tx = conn.transaction().map_err(fail)?;
        tx.execute_batch(migration.sql).map_err(fail)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (:version, :name)",
            rusqlite::named_params! {
                ":version": migration.version,
                ":name": migration.name,
            },
        )
        .map_err(fail)?;
        tx.commit().map_err(fail)?;

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "Applied migration"
        );
        applied.push(migration.version);
    }

    Ok(applied)
}
