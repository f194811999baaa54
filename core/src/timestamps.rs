use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::{ExportError, Result};
use crate::models::START_DATE_FORMAT;

/// Apple skriver `2023-01-01 08:00:00 +0000`; variantene med kolon og uten
/// mellomrom dukker opp i håndredigerte eksporter.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S %:z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%:z",
];

pub fn parse_with_offset(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
}

/// Streng: body-mass-tidspunkt må ha offset.
pub fn parse_absolute(value: &str) -> Result<DateTime<FixedOffset>> {
    parse_with_offset(value).ok_or_else(|| ExportError::Timestamp {
        value: value.to_string(),
    })
}

/// Økt-start: først med offset, så naiv. Kun veggtiden beholdes.
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime> {
    if let Some(dt) = parse_with_offset(value) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value.trim(), START_DATE_FORMAT).map_err(|_| {
        ExportError::Timestamp {
            value: value.to_string(),
        }
    })
}

/// Fester en veggtid til et tidspunkt i `tz`.
///
/// Tvetydige tider (klokka stilles tilbake) gir det seneste tidspunktet,
/// altså normaltid. Tider i et hull ved sommertid får offseten som gjelder
/// ved samme UTC-avlesning.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<FixedOffset> {
    if let Some(dt) = tz.from_local_datetime(&naive).latest() {
        return dt.fixed_offset();
    }
    let offset = tz.offset_from_utc_datetime(&naive).fix();
    let utc = naive - chrono::Duration::seconds(offset.local_minus_utc() as i64);
    tz.from_utc_datetime(&utc).fixed_offset()
}
