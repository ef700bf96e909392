use rusqlite::{Connection, Row, params};

use crate::Result;
use crate::queries::to_count;
use crate::records::{CallLogRecord, NewCallLog};

/// Insert a call log and return the `callId` SQLite assigned to it.
pub fn insert(conn: &Connection, call: &NewCallLog) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        r#"
        INSERT INTO callLogs (phoneNumber, startTime, endTime, direction, userId)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )?;
    stmt.execute(params![
        &call.phone_number,
        call.start_time,
        call.end_time,
        &call.direction,
        call.user_id
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn get_all(conn: &Connection) -> Result<Vec<CallLogRecord>> {
    select(
        conn,
        r#"
        SELECT callId, phoneNumber, startTime, endTime, direction, userId
        FROM callLogs
        ORDER BY callId
        "#,
    )
}

/// All call logs by user, then start time. Ties keep insertion order.
pub fn get_ordered(conn: &Connection) -> Result<Vec<CallLogRecord>> {
    select(
        conn,
        r#"
        SELECT callId, phoneNumber, startTime, endTime, direction, userId
        FROM callLogs
        ORDER BY userId ASC, startTime ASC, callId ASC
        "#,
    )
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM callLogs", [], |row| row.get(0))?;
    to_count(count)
}

fn select(conn: &Connection, sql: &str) -> Result<Vec<CallLogRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let calls = stmt
        .query_map([], from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(calls)
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<CallLogRecord> {
    Ok(CallLogRecord {
        call_id: row.get(0)?,
        phone_number: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        direction: row.get(4)?,
        user_id: row.get(5)?,
    })
}
