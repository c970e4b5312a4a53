/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Tax identification numbers are stored as BIGINT (at most twelve digits).
pub type TaxId = i64;
