use serde::Serialize;

/// A user row as stored, with its assigned surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A validated user waiting to be inserted.
///
/// Both names are already trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

/// A call log row as stored, with its assigned surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallLogRecord {
    pub call_id: i64,
    pub phone_number: String,
    pub start_time: i64,
    pub end_time: i64,
    pub direction: String,
    /// Advisory reference to `UserRecord::user_id`; not guaranteed to exist.
    pub user_id: i64,
}

/// A validated call log waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCallLog {
    pub phone_number: String,
    pub start_time: i64,
    pub end_time: i64,
    pub direction: String,
    pub user_id: i64,
}

/// Per-user call statistics, one per distinct `userId` present in `callLogs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAnalytics {
    pub user_id: i64,
    /// Mean of `end_time - start_time`, rounded to one decimal place.
    pub avg_duration: f64,
    pub num_calls: i64,
}

/// Rows that are stored but look suspicious.
///
/// Loading accepts both cases; this report only counts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Call logs whose `userId` matches no stored user.
    pub orphaned_call_logs: usize,
    /// Call logs that end before they start.
    pub negative_durations: usize,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.orphaned_call_logs == 0 && self.negative_durations == 0
    }
}
