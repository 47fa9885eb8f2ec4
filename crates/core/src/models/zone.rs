use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AvailError;

/// Time zones a schedule can be displayed and entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    /// Greenwich Mean Time, the storage zone.
    Gmt,
    /// India Standard Time, GMT+5:30.
    Ist,
}

impl Zone {
    /// The zone every slot is stored in.
    pub const CANONICAL: Zone = Zone::Gmt;

    /// Selector order.
    pub const ALL: [Zone; 2] = [Zone::Ist, Zone::Gmt];

    /// Offset from GMT in half-hour marks.
    pub fn offset_half_hours(self) -> i16 {
        match self {
            Zone::Gmt => 0,
            Zone::Ist => 11,
        }
    }

    pub fn offset_hours(self) -> f64 {
        f64::from(self.offset_half_hours()) / 2.0
    }

    pub fn code(self) -> &'static str {
        match self {
            Zone::Gmt => "GMT",
            Zone::Ist => "IST",
        }
    }

    /// Selector label, e.g. "IST (UTC+5:30)".
    pub fn label(self) -> &'static str {
        match self {
            Zone::Gmt => "GMT (UTC+0)",
            Zone::Ist => "IST (UTC+5:30)",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Zone {
    type Err = AvailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GMT" => Ok(Zone::Gmt),
            "IST" => Ok(Zone::Ist),
            _ => Err(AvailError::InvalidZone(s.to_string())),
        }
    }
}
