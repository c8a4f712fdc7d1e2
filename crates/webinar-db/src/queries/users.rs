//! Attendee database queries.
//!
//! This module provides registration and lookup for webinar attendees.

use rusqlite::{Connection, Row, Transaction, TransactionBehavior};
use webinar_common::{Error, Result, UserId};

use super::{format_timestamp, now, parse_timestamp, webinars};
use crate::models::User;

const USER_COLUMNS: &str = "id, first_name, last_name, phone, registered_at";

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId::from(row.get::<_, i64>(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
        registered_at: parse_timestamp(4, &row.get::<_, String>(4)?)?,
    })
}

/// Create a new user.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `first_name` - Attendee's first name
/// * `last_name` - Attendee's last name
/// * `phone` - Phone number, unique per attendee
///
/// # Returns
///
/// * `Ok(User)` - The created user
/// * `Err(Error::Conflict)` - If the phone number is already registered
/// * `Err(Error)` - If a database error occurs
pub fn create_user(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> Result<User> {
    let registered_at = now();

    conn.execute(
        "INSERT INTO users (first_name, last_name, phone, registered_at)
         VALUES (:first_name, :last_name, :phone, :registered_at)",
        rusqlite::named_params! {
            ":first_name": first_name,
            ":last_name": last_name,
            ":phone": phone,
            ":registered_at": format_timestamp(&registered_at),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::conflict("Phone already registered")
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(User {
        id: UserId::from(conn.last_insert_rowid()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
        registered_at,
    })
}

/// Get a user by phone number.
///
/// # Returns
///
/// * `Ok(Some(User))` - The user if found
/// * `Ok(None)` - If no attendee registered with this phone
/// * `Err(Error)` - If a database error occurs
pub fn get_user_by_phone(conn: &Connection, phone: &str) -> Result<Option<User>> {
    let result = conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE phone = :phone"),
        rusqlite::named_params! { ":phone": phone },
        row_to_user,
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count registered users.
pub fn count_users(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Register an attendee for the webinar.
///
/// Runs in a single immediate transaction: the seat check, the duplicate
/// phone check, the insert, and the seat increment commit together or not
/// at all.
///
/// # Returns
///
/// * `Ok(User)` - The registered attendee
/// * `Err(Error::Internal)` - "Webinar not found" when no webinar exists
/// * `Err(Error::Forbidden)` - "Webinar is full"
/// * `Err(Error::Conflict)` - "Phone already registered"
/// * `Err(Error)` - If a database error occurs
pub fn register_attendee(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> Result<User> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| Error::database(e.to_string()))?;

    let webinar = webinars::get_first_webinar(&tx)?
        .ok_or_else(|| Error::internal("Webinar not found"))?;

    if webinar.is_full() {
        return Err(Error::forbidden("Webinar is full"));
    }

    if get_user_by_phone(&tx, phone)?.is_some() {
        return Err(Error::conflict("Phone already registered"));
    }

    let user = create_user(&tx, first_name, last_name, phone)?;

    if !webinars::increment_registered_count(&tx, webinar.id)? {
        return Err(Error::forbidden("Webinar is full"));
    }

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(user_id = %user.id, webinar_id = %webinar.id, "Registered attendee");
    Ok(user)
}
