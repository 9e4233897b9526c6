//! Time utilities: resolving caller-supplied timestamps to UTC.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse a timestamp the calling layer may hand us: RFC 3339 with an offset,
/// or a naive "YYYY-MM-DD HH:MM" wall-clock time in an IANA tz like
/// "Asia/Kolkata", returning UTC.
pub fn parse_timestamp(raw: &str, tz: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    let ndt = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|e| anyhow::anyhow!("invalid timestamp '{raw}': {e}"))?;

    let local = tz
        .from_local_datetime(&ndt)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous or invalid local time (DST?): {raw} {tz}"))?;

    Ok(local.with_timezone(&Utc))
}
