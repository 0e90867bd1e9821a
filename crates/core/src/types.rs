use chrono::{DateTime, Utc};

/// Primary key of the `games` table (`BIGSERIAL`).
pub type DbId = i64;

/// `TIMESTAMPTZ` bookkeeping columns and the `horaDaConsulta` read time.
pub type Timestamp = DateTime<Utc>;
