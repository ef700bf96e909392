use rusqlite::Connection;

use crate::Result;
use crate::queries::to_count;
use crate::records::{IntegrityReport, UserAnalytics};

/// Average call duration and call count for every user that has calls.
///
/// Users without call logs do not appear. Rounding is SQLite's `ROUND(x, 1)`.
pub fn user_analytics(conn: &Connection) -> Result<Vec<UserAnalytics>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT userId,
               ROUND(AVG(endTime - startTime), 1) AS avgDuration,
               COUNT(*) AS numCalls
        FROM callLogs
        GROUP BY userId
        ORDER BY userId
        "#,
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UserAnalytics {
                user_id: row.get(0)?,
                avg_duration: row.get(1)?,
                num_calls: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn integrity(conn: &Connection) -> Result<IntegrityReport> {
    let (orphaned, negative): (i64, i64) = conn.query_row(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN u.userId IS NULL THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN c.endTime < c.startTime THEN 1 ELSE 0 END), 0)
        FROM callLogs c
        LEFT JOIN users u ON u.userId = c.userId
        "#,
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(IntegrityReport {
        orphaned_call_logs: to_count(orphaned)?,
        negative_durations: to_count(negative)?,
    })
}
