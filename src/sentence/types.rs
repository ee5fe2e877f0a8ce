use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::{NrxError, Result};

/// Two character identifier of the device that sent a sentence
///
/// # Example
///
/// ```
/// use navtex_nrx::TalkerId;
///
/// let talker: TalkerId = "CR".parse().unwrap();
/// assert_eq!(talker, TalkerId::CR);
/// assert_eq!(talker.to_string(), "CR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkerId([u8; 2]);

impl TalkerId {
    /// Data receiver (NAVTEX receivers report as `CR`)
    pub const CR: TalkerId = TalkerId(*b"CR");
    /// Global Positioning System receiver
    pub const GP: TalkerId = TalkerId(*b"GP");
    /// Integrated instrumentation
    pub const II: TalkerId = TalkerId(*b"II");
    /// Integrated navigation
    pub const IN: TalkerId = TalkerId(*b"IN");

    /// Create a talker id from two uppercase ASCII letters or digits
    pub fn new(id: &str) -> Result<Self> {
        let bytes = id.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
            return Err(NrxError::InvalidArgument(format!(
                "Talker id must be 2 uppercase letters or digits, got '{}'",
                id
            )));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    /// Raw ASCII bytes of the id
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl FromStr for TalkerId {
    type Err = NrxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

/// Validity flag carried by many sentences (`A` = valid, `V` = invalid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataStatus {
    /// Data valid
    Active,
    /// Data invalid
    Void,
}

impl DataStatus {
    /// Wire character for this status
    pub fn to_char(self) -> char {
        match self {
            DataStatus::Active => 'A',
            DataStatus::Void => 'V',
        }
    }

    /// Parse a wire character
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            'A' => Ok(DataStatus::Active),
            'V' => Ok(DataStatus::Void),
            other => Err(NrxError::Parse(format!(
                "Unknown data status '{}'",
                other
            ))),
        }
    }
}

/// Calendar date as transmitted in date fields
///
/// Only field ranges are checked; whether the day exists in the given month
/// is left to the caller (see the `chrono` conversions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NmeaDate {
    year: u16,
    month: u8,
    day: u8,
}

impl NmeaDate {
    /// Create a date from a four digit year, a month (1-12) and a day (1-31)
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if year > 9999 {
            return Err(NrxError::InvalidArgument(format!(
                "Year must be at most 4 digits, got {}",
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(NrxError::InvalidArgument(format!(
                "Month must be from 1 to 12, got {}",
                month
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(NrxError::InvalidArgument(format!(
                "Day must be from 1 to 31, got {}",
                day
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Expand a two digit year the way NMEA devices do (00-49 => 20xx, 50-99 => 19xx)
    pub fn expand_year(year: u16) -> u16 {
        match year {
            0..=49 => 2000 + year,
            50..=99 => 1900 + year,
            _ => year,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl From<NaiveDate> for NmeaDate {
    fn from(date: NaiveDate) -> Self {
        // chrono months/days are always in range; years outside 0..=9999 are clamped
        Self {
            year: date.year().clamp(0, 9999) as u16,
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<NmeaDate> for NaiveDate {
    type Error = NrxError;

    fn try_from(date: NmeaDate) -> Result<Self> {
        NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32).ok_or_else(
            || {
                NrxError::InvalidArgument(format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    date.year, date.month, date.day
                ))
            },
        )
    }
}

/// UTC time of day in `hhmmss.ss` form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NmeaTime {
    hour: u8,
    minute: u8,
    second: f64,
}

impl NmeaTime {
    /// Create a time; `second` may carry a fractional part and allows a leap second
    pub fn new(hour: u8, minute: u8, second: f64) -> Result<Self> {
        if hour > 23 {
            return Err(NrxError::InvalidArgument(format!(
                "Hour must be from 0 to 23, got {}",
                hour
            )));
        }
        if minute > 59 {
            return Err(NrxError::InvalidArgument(format!(
                "Minute must be from 0 to 59, got {}",
                minute
            )));
        }
        if !(0.0..61.0).contains(&second) {
            return Err(NrxError::InvalidArgument(format!(
                "Second must be from 0 to less than 61, got {}",
                second
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }
}

impl FromStr for NmeaTime {
    type Err = NrxError;

    /// Parse `hhmmss` with an optional fractional second part
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NrxError::Parse(format!("Invalid time '{}', expected hhmmss.ss", s));

        if s.len() < 6 || !s.is_ascii() || !s[..6].bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u8 = s[0..2].parse().map_err(|_| invalid())?;
        let minute: u8 = s[2..4].parse().map_err(|_| invalid())?;
        let second: f64 = s[4..].parse().map_err(|_| invalid())?;

        Self::new(hour, minute, second).map_err(|_| invalid())
    }
}

impl fmt::Display for NmeaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Truncate to hundredths: 59.999 must not print as 60.00
        let centis = ((self.second * 100.0 + 1e-6).floor() as u32).min(6099);
        write!(
            f,
            "{:02}{:02}{:02}.{:02}",
            self.hour,
            self.minute,
            centis / 100,
            centis % 100
        )
    }
}

impl From<NaiveTime> for NmeaTime {
    fn from(time: NaiveTime) -> Self {
        // Leap seconds show up as nanosecond values above one second
        let fraction = f64::from(time.nanosecond()) / 1_000_000_000.0;
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: f64::from(time.second()) + fraction,
        }
    }
}

impl TryFrom<NmeaTime> for NaiveTime {
    type Error = NrxError;

    fn try_from(time: NmeaTime) -> Result<Self> {
        let whole = time.second.trunc();
        let nanos = ((time.second - whole) * 1_000_000_000.0).round() as u32;
        let (second, nanos) = if whole >= 60.0 {
            (59, 1_000_000_000 + nanos)
        } else {
            (whole as u32, nanos.min(999_999_999))
        };
        NaiveTime::from_hms_nano_opt(time.hour as u32, time.minute as u32, second, nanos)
            .ok_or_else(|| NrxError::InvalidArgument(format!("{} is not a time of day", time)))
    }
}
