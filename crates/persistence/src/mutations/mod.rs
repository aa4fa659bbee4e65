// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations for the persistence layer.
//!
//! Timestamps are stored as RFC 3339 text in UTC.

pub mod attendance;
pub mod events;
pub mod feedback;
pub mod registrations;
pub mod tokens;
pub mod users;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::error::PersistenceError;

/// Formats a timestamp as RFC 3339 in UTC.
pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::InvalidData(format!("Failed to format timestamp: {e}")))
}

/// The current time as RFC 3339 in UTC.
pub(crate) fn now_timestamp() -> Result<String, PersistenceError> {
    format_timestamp(OffsetDateTime::now_utc())
}
