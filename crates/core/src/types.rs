use chrono::SubsecRound;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time truncated to microseconds, the resolution of `TIMESTAMPTZ`.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}
