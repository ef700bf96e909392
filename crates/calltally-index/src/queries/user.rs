use rusqlite::{Connection, params};

use crate::Result;
use crate::queries::to_count;
use crate::records::{NewUser, UserRecord};

/// Insert a user and return the `userId` SQLite assigned to it.
pub fn insert(conn: &Connection, user: &NewUser) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        r#"
        INSERT INTO users (firstName, lastName)
        VALUES (?1, ?2)
        "#,
    )?;
    stmt.execute(params![&user.first_name, &user.last_name])?;

    Ok(conn.last_insert_rowid())
}

pub fn get_all(conn: &Connection) -> Result<Vec<UserRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT userId, firstName, lastName
        FROM users
        ORDER BY userId
        "#,
    )?;

    let users = stmt
        .query_map([], |row| {
            Ok(UserRecord {
                user_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(users)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    to_count(count)
}
