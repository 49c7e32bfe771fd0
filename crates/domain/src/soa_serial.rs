use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt;

/// Zone serial derived from wall-clock time, `YYYYMMDDHHMMSS`.
///
/// Two serials taken within the same second are equal; across seconds the
/// value only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoaSerial(u64);

impl SoaSerial {
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        let date = at.date_naive();
        let time = at.time();

        let value = u64::from(date.year().unsigned_abs()) * 10_000_000_000
            + u64::from(date.month()) * 100_000_000
            + u64::from(date.day()) * 1_000_000
            + u64::from(time.hour()) * 10_000
            + u64::from(time.minute()) * 100
            + u64::from(time.second());

        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The 32-bit field carried in the SOA RDATA.
    ///
    /// Reduced modulo 2^32; under RFC 1982 serial arithmetic successive
    /// values still compare as increasing while the gap stays below 2^31.
    pub fn wire_value(&self) -> u32 {
        (self.0 % (1u64 << 32)) as u32
    }
}

impl fmt::Display for SoaSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
