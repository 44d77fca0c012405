// src/utils/units.rs
use serde::{Serialize, Serializer};
use std::fmt;

/// Unit callers use when they have no preference.
pub const DEFAULT_UNIT: &str = "bytes";

const KIB: f64 = 1024.0;

// Below this, values print in exponent form instead of a long run of zeros.
const EXPONENT_BELOW: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
}

impl SizeUnit {
    /// Case-insensitive; singular and plural spellings are both accepted.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.to_lowercase().as_str() {
            "bit" | "bits" => Some(SizeUnit::Bit),
            "byte" | "bytes" => Some(SizeUnit::Byte),
            "kilobyte" | "kilobytes" => Some(SizeUnit::Kilobyte),
            "megabyte" | "megabytes" => Some(SizeUnit::Megabyte),
            "gigabyte" | "gigabytes" => Some(SizeUnit::Gigabyte),
            _ => None,
        }
    }

    pub fn convert(self, bytes: u64) -> f64 {
        let bytes = bytes as f64;
        match self {
            SizeUnit::Bit => bytes * 8.0,
            SizeUnit::Byte => bytes,
            SizeUnit::Kilobyte => bytes / KIB,
            SizeUnit::Megabyte => bytes / (KIB * KIB),
            SizeUnit::Gigabyte => bytes / (KIB * KIB * KIB),
        }
    }
}

/// Non-error outcomes of a size query that carry guidance instead of a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    MissingUnit,
    UnsupportedUnit,
    SizeUnavailable,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::MissingUnit => {
                "Please provide a valid unit. Use bit, byte, kilobyte, megabyte, or gigabyte."
            }
            Advisory::UnsupportedUnit => {
                "Unsupported unit. Please use bit, byte, kilobyte, megabyte, or gigabyte."
            }
            Advisory::SizeUnavailable => "Unable to retrieve file size",
        }
    }
}

/// Result of a size query. `Display` yields `"<value> <unit>"` with the
/// unit exactly as the caller spelled it, or the advisory text.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeReading {
    Converted { value: f64, unit: String },
    Advisory(Advisory),
}

impl SizeReading {
    /// Reads a raw byte count in the requested unit. The unit is checked
    /// first so a bad argument never depends on the file.
    pub fn from_bytes(bytes: u64, unit: &str) -> Self {
        let Some(parsed) = SizeUnit::parse(unit) else {
            return SizeReading::Advisory(Advisory::UnsupportedUnit);
        };
        if bytes == 0 {
            return SizeReading::Advisory(Advisory::SizeUnavailable);
        }
        SizeReading::Converted { value: parsed.convert(bytes), unit: unit.to_string() }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            SizeReading::Converted { value, .. } => Some(*value),
            SizeReading::Advisory(_) => None,
        }
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, SizeReading::Advisory(_))
    }
}

/// `None`, empty and whitespace-only units are all "no unit given".
pub fn usable_unit(unit: Option<&str>) -> Option<&str> {
    unit.filter(|u| !u.trim().is_empty())
}

impl fmt::Display for SizeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeReading::Converted { value, unit } if *value != 0.0 && value.abs() < EXPONENT_BELOW => {
                write!(f, "{:e} {}", value, unit)
            }
            SizeReading::Converted { value, unit } => write!(f, "{} {}", value, unit),
            SizeReading::Advisory(advisory) => f.write_str(advisory.message()),
        }
    }
}

impl Serialize for SizeReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
