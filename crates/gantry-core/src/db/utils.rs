//! Column conversion helpers shared by the query modules.

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;

/// Wraps a parse failure in the error rusqlite expects from row mappers.
fn conversion_error<E>(idx: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(error))
}

/// Reads a `YYYY-MM-DD` text column.
pub(super) fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| conversion_error(idx, e))
}

/// Reads an RFC 3339 timestamp text column.
pub(super) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(idx, e))
}

/// Reads a JSON text column.
pub(super) fn json_column<T: DeserializeOwned>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text).map_err(|e| conversion_error(idx, e))
}

/// Reads a nullable JSON text column.
pub(super) fn optional_json_column<T: DeserializeOwned>(
    row: &Row,
    idx: usize,
) -> rusqlite::Result<Option<T>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| serde_json::from_str(&t).map_err(|e| conversion_error(idx, e)))
        .transpose()
}
