//! Weekly time model.
//!
//! # Design
//!
//! A meeting slot recurs every week, so the only coordinates that matter are
//! the weekday and the minute of the day.  `TimeOfDay` stores minutes since
//! midnight as a `u16`, which keeps `ClassTime` `Copy` and makes every
//! comparison an integer compare.
//!
//! Intervals are half-open: `[start, end)`.  Two slots that merely touch
//! (`a.end == b.start`) do not conflict, so back-to-back classes are allowed.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── Weekday ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Catalog short token for this day.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday    => "M",
            Weekday::Tuesday   => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday  => "Th",
            Weekday::Friday    => "F",
            Weekday::Saturday  => "Sa",
            Weekday::Sunday    => "Su",
        }
    }

    /// Resolve a single short token (`M`, `T`, `W`, `Th`, `F`, `Sa`, `Su`).
    pub fn from_short_name(token: &str) -> CoreResult<Weekday> {
        match token {
            "M"  => Ok(Weekday::Monday),
            "T"  => Ok(Weekday::Tuesday),
            "W"  => Ok(Weekday::Wednesday),
            "Th" => Ok(Weekday::Thursday),
            "F"  => Ok(Weekday::Friday),
            "Sa" => Ok(Weekday::Saturday),
            "Su" => Ok(Weekday::Sunday),
            other => Err(CoreError::InvalidWeekday(other.to_owned())),
        }
    }

    /// Split a concatenated day string such as `"MWF"` or `"TTh"` into days,
    /// in the order they appear.
    ///
    /// Two-letter tokens are matched before one-letter ones, so `"Th"` is
    /// Thursday rather than Tuesday followed by garbage.
    pub fn parse_days(days: &str) -> CoreResult<Vec<Weekday>> {
        let days = days.trim();
        let mut out = Vec::with_capacity(days.len());
        let mut rest = days;
        while !rest.is_empty() {
            let two = rest.get(..2).and_then(|t| Weekday::from_short_name(t).ok());
            let (day, used) = match two {
                Some(d) => (d, 2),
                _ => {
                    let one = rest.get(..1).unwrap_or(rest);
                    match Weekday::from_short_name(one) {
                        Ok(d) => (d, 1),
                        Err(_) => return Err(CoreError::InvalidWeekday(rest.to_owned())),
                    }
                }
            };
            out.push(day);
            rest = &rest[used..];
        }
        Ok(out)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Minutes since midnight, `0..1440`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay(pub u16);

impl TimeOfDay {
    /// Build from an hour (0–23) and minute (0–59).
    ///
    /// # Panics
    /// Panics in debug mode if either component is out of range.
    #[inline]
    pub const fn hm(hour: u16, minute: u16) -> TimeOfDay {
        debug_assert!(hour < 24 && minute < 60);
        TimeOfDay(hour * 60 + minute)
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Accepts `"h:mm AM"` / `"h:mm PM"` as the catalog prints it, or 24-hour
    /// `"HH:MM"`.
    fn from_str(s: &str) -> CoreResult<TimeOfDay> {
        let bad = || CoreError::InvalidTime(s.to_owned());
        let text = s.trim();

        let upper = text.to_ascii_uppercase();
        let (clock, meridiem) = if let Some(c) = upper.strip_suffix("AM") {
            (c.trim_end(), Some(false))
        } else if let Some(c) = upper.strip_suffix("PM") {
            (c.trim_end(), Some(true))
        } else {
            (upper.as_str(), None)
        };

        let (h, m) = clock.split_once(':').ok_or_else(bad)?;
        let hour: u16 = h.parse().map_err(|_| bad())?;
        let minute: u16 = m.parse().map_err(|_| bad())?;
        if minute >= 60 || m.len() != 2 {
            return Err(bad());
        }

        let hour = match meridiem {
            None if hour < 24 => hour,
            Some(pm) if (1..=12).contains(&hour) => (hour % 12) + if pm { 12 } else { 0 },
            _ => return Err(bad()),
        };
        Ok(TimeOfDay::hm(hour, minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = (self.hour(), self.minute());
        let (h12, suffix) = match h {
            0 => (12, "AM"),
            1..=11 => (h, "AM"),
            12 => (12, "PM"),
            _ => (h - 12, "PM"),
        };
        write!(f, "{h12}:{m:02} {suffix}")
    }
}

// ── ClassTime ─────────────────────────────────────────────────────────────────

/// One weekly recurring meeting slot: `[start, end)` on `day`.
///
/// Fields are public and `new` does not validate, so a hand-built filter
/// block is taken as-is.  Ingestion goes through [`ClassTime::parse_range`],
/// which rejects empty intervals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTime {
    pub start: TimeOfDay,
    pub end:   TimeOfDay,
    pub day:   Weekday,
}

impl ClassTime {
    #[inline]
    pub const fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> ClassTime {
        ClassTime { start, end, day }
    }

    /// Parse `"10:30 AM - 11:20 AM"` for the given day.
    pub fn parse_range(day: Weekday, range: &str) -> CoreResult<ClassTime> {
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| CoreError::InvalidTime(range.to_owned()))?;
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        if start >= end {
            return Err(CoreError::EmptyInterval { start, end });
        }
        Ok(ClassTime { start, end, day })
    }

    /// Expand a catalog meeting row (`days = "MWF"`, `range = "9:30 AM -
    /// 10:20 AM"`) into one `ClassTime` per day.
    pub fn expand(days: &str, range: &str) -> CoreResult<Vec<ClassTime>> {
        Weekday::parse_days(days)?
            .into_iter()
            .map(|day| ClassTime::parse_range(day, range))
            .collect()
    }

    /// Length of the slot in minutes (zero for a degenerate interval).
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` if the two slots overlap on the same day.  See [`conflicts`].
    #[inline]
    pub fn conflicts_with(&self, other: &ClassTime) -> bool {
        conflicts(*self, *other)
    }
}

impl fmt::Display for ClassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.day, self.start, self.end)
    }
}

/// The conflict predicate.
///
/// Different days never conflict.  On the same day the half-open intervals
/// overlap unless one ends at or before the other starts.
#[inline]
pub fn conflicts(a: ClassTime, b: ClassTime) -> bool {
    if a.day != b.day {
        return false;
    }
    !(a.end <= b.start || b.end <= a.start)
}
