//! Webinar database queries.

use rusqlite::{Connection, Row};
use webinar_common::{Error, Result, WebinarId};

use super::{format_timestamp, parse_timestamp};
use crate::models::{NewWebinar, Webinar};

fn row_to_webinar(row: &Row<'_>) -> rusqlite::Result<Webinar> {
    Ok(Webinar {
        id: WebinarId::from(row.get::<_, i64>(0)?),
        title: row.get(1)?,
        start_time: parse_timestamp(2, &row.get::<_, String>(2)?)?,
        end_time: parse_timestamp(3, &row.get::<_, String>(3)?)?,
        video_url: row.get(4)?,
        capacity: row.get(5)?,
        registered_count: row.get(6)?,
        is_live: row.get::<_, i32>(7)? != 0,
    })
}

/// Insert a webinar.
pub fn create_webinar(conn: &Connection, new: &NewWebinar) -> Result<Webinar> {
    conn.execute(
        "INSERT INTO webinars (title, start_time, end_time, video_url, capacity, registered_count, is_live)
         VALUES (:title, :start_time, :end_time, :video_url, :capacity, 0, :is_live)",
        rusqlite::named_params! {
            ":title": new.title,
            ":start_time": format_timestamp(&new.start_time),
            ":end_time": format_timestamp(&new.end_time),
            ":video_url": new.video_url,
            ":capacity": new.capacity,
            ":is_live": new.is_live,
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Webinar {
        id: WebinarId::from(conn.last_insert_rowid()),
        title: new.title.clone(),
        start_time: new.start_time,
        end_time: new.end_time,
        video_url: new.video_url.clone(),
        capacity: new.capacity,
        registered_count: 0,
        is_live: new.is_live,
    })
}

/// Get the webinar the page is about (the oldest row).
pub fn get_first_webinar(conn: &Connection) -> Result<Option<Webinar>> {
    let result = conn.query_row(
        "SELECT id, title, start_time, end_time, video_url, capacity, registered_count, is_live
         FROM webinars ORDER BY id LIMIT 1",
        [],
        row_to_webinar,
    );

    match result {
        Ok(webinar) => Ok(Some(webinar)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count webinars.
pub fn count_webinars(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM webinars", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Take one seat.
///
/// Returns `false` without changing anything when the webinar is already at
/// capacity or does not exist.
pub fn increment_registered_count(conn: &Connection, id: WebinarId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "UPDATE webinars SET registered_count = registered_count + 1
             WHERE id = :id AND registered_count < capacity",
            rusqlite::named_params! { ":id": id.get() },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}

/// Insert `new` only when the table is empty.
///
/// Returns the created webinar, or `None` when one already existed.
pub fn seed_default_webinar(conn: &Connection, new: &NewWebinar) -> Result<Option<Webinar>> {
    if count_webinars(conn)? > 0 {
        return Ok(None);
    }
    create_webinar(conn, new).map(Some)
}
