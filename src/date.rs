//! This module handles the HTTP-date format used by `Date`, `Expires`,
//! `Last-Modified` and friends, which is the IMF-fixdate form of
//! [RFC 7231 section 7.1.1.1](https://tools.ietf.org/html/rfc7231#section-7.1.1.1):
//!
//! ```text
//! Sat, 06 Apr 2019 17:00:00 GMT
//! ```

use crate::{
    Error,
    Timestamp,
};
use std::time::SystemTime;

const DAY_NAMES: [&[u8; 3]; 7] = [
    b"Sun", b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat",
];

const MONTH_NAMES: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun",
    b"Jul", b"Aug", b"Sep", b"Oct", b"Nov", b"Dec",
];

const HTTP_DATE_SIZE: usize = 29;

// Everything in an IMF-fixdate except the fields, which are filled in by
// position.
const HTTP_DATE_TEMPLATE: &[u8; HTTP_DATE_SIZE] = b"ddd, 00 mmm 0000 00:00:00 GMT";

fn parse_digits(digits: &[u8]) -> Option<u16> {
    digits.iter().try_fold(0_u16, |value, digit| {
        if digit.is_ascii_digit() {
            Some(value * 10 + u16::from(digit - b'0'))
        } else {
            None
        }
    })
}

#[allow(clippy::cast_possible_truncation)]
fn parse_two_digits(digits: &[u8]) -> Option<u8> {
    parse_digits(digits).map(|value| value as u8)
}

fn find_name(
    names: &[&[u8; 3]],
    name: &[u8],
) -> Option<usize> {
    names.iter().position(|candidate| &candidate[..] == name)
}

fn write_two_digits(
    buf: &mut [u8],
    value: u8,
) {
    buf[0] = b'0' + value / 10;
    buf[1] = b'0' + value % 10;
}

impl Timestamp {
    /// Parse an HTTP-date.  Day and month names must match exactly,
    /// including case, and the named day of the week must be the day the
    /// date actually falls on.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_rfc7231(text: &str) -> Result<Self, Error> {
        let invalid = || Error::DateInvalid(text.into());
        let bytes = text.as_bytes();
        if bytes.len() != HTTP_DATE_SIZE {
            return Err(invalid());
        }
        let delimiters_match = HTTP_DATE_TEMPLATE.iter()
            .zip(bytes)
            .enumerate()
            .filter(|(i, _)| matches!(*i, 3 | 4 | 7 | 11 | 16 | 19 | 22 | 25..=28))
            .all(|(_, (expected, actual))| expected == actual);
        if !delimiters_match {
            return Err(invalid());
        }
        let weekday = find_name(&DAY_NAMES, &bytes[0..3]).ok_or_else(invalid)?;
        let month = find_name(&MONTH_NAMES, &bytes[8..11]).ok_or_else(invalid)?;
        let day = parse_two_digits(&bytes[5..7]).ok_or_else(invalid)?;
        let year = parse_digits(&bytes[12..16]).ok_or_else(invalid)?;
        let hour = parse_two_digits(&bytes[17..19]).ok_or_else(invalid)?;
        let minute = parse_two_digits(&bytes[20..22]).ok_or_else(invalid)?;
        let second = parse_two_digits(&bytes[23..25]).ok_or_else(invalid)?;
        let timestamp = Self::new(year, month as u8 + 1, day, hour, minute, second)?;
        if usize::from(timestamp.weekday()) == weekday {
            Ok(timestamp)
        } else {
            log::debug!("HTTP-date {:?} names the wrong day of the week", text);
            Err(Error::DateWeekdayMismatch(text.into()))
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rfc7231(&self) -> String {
        let mut buf = *HTTP_DATE_TEMPLATE;
        buf[0..3].copy_from_slice(DAY_NAMES[usize::from(self.weekday())]);
        write_two_digits(&mut buf[5..7], self.day());
        buf[8..11].copy_from_slice(MONTH_NAMES[usize::from(self.month() - 1)]);
        write_two_digits(&mut buf[12..14], (self.year() / 100) as u8);
        write_two_digits(&mut buf[14..16], (self.year() % 100) as u8);
        write_two_digits(&mut buf[17..19], self.hour());
        write_two_digits(&mut buf[20..22], self.minute());
        write_two_digits(&mut buf[23..25], self.second());
        buf.iter().copied().map(char::from).collect()
    }
}

/// The value of an HTTP-date header such as `Date` or `Expires`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(Timestamp);

impl Date {
    pub fn parse<T>(text: T) -> Result<Self, Error>
        where T: AsRef<str>
    {
        Timestamp::from_rfc7231(text.as_ref()).map(Self)
    }

    /// The current time, truncated to the second.
    pub fn now() -> Result<Self, Error> {
        Timestamp::from_system_time(SystemTime::now()).map(Self)
    }

    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.0
    }
}

impl From<Timestamp> for Date {
    fn from(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc7231())
    }
}
