use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// One blood-pressure measurement as the server stores it.
///
/// Server-assigned `id`; never edited in place locally — replaced wholesale
/// by fetches or patched by confirmed add/delete outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    pub systolic: i32,
    pub diastolic: i32,
    /// mmHg values are integers; the date carries no time-of-day meaning.
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct NewReadingRequest {
    pub systolic: i32,
    pub diastolic: i32,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
}

/// Envelope around a freshly created reading: `{"message": ..., "reading": {...}}`.
#[derive(Debug, Deserialize)]
pub struct CreatedReadingResponse {
    pub reading: Reading,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Non-2xx responses carry `{"message": ...}` when the backend itself
/// produced them; proxies and crashes may send anything, so every field
/// is optional.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Date (de)serialization
// ---------------------------------------------------------------------------

/// The client sends plain `%Y-%m-%d` dates, but the server echoes them back
/// as full ISO datetimes (`2024-01-01T00:00:00`). Accept both on the way in.
pub(crate) mod wire_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            return Ok(date);
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .map_err(serde::de::Error::custom)
    }
}
