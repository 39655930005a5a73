//! Wall-clock minute arithmetic for study timelines.
//!
//! Block start times are minutes since midnight with no day rollover: a plan
//! that runs past midnight keeps counting ("25:30"), which is how the
//! timeline displays it.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(i32);

impl ClockTime {
    pub fn from_minutes(minutes: i32) -> Self {
        Self(minutes.max(0))
    }

    /// Parse an "HH:mm" anchor like "09:00". Anchors must be a real
    /// time-of-day (hours 0-23); only derived cursor values may exceed it.
    pub fn parse(s: &str) -> Result<Self> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("invalid clock time '{s}': expected HH:mm"))?;
        let h: i32 = h
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid hour in clock time '{s}'"))?;
        let m: i32 = m
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid minute in clock time '{s}'"))?;
        if !(0..24).contains(&h) || !(0..60).contains(&m) {
            anyhow::bail!("clock time out of range: '{s}'");
        }
        Ok(Self(h * 60 + m))
    }

    pub fn plus_minutes(self, minutes: i32) -> Self {
        Self(self.0 + minutes)
    }

    pub fn total_minutes(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        // Cursor values past 24:00 round-trip, so hours are unbounded here.
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| D::Error::custom(format!("invalid clock time '{s}': expected HH:mm")))?;
        let h: i32 = h.parse().map_err(D::Error::custom)?;
        let m: i32 = m.parse().map_err(D::Error::custom)?;
        if h < 0 || !(0..60).contains(&m) {
            return Err(D::Error::custom(format!("clock time out of range: '{s}'")));
        }
        Ok(ClockTime(h * 60 + m))
    }
}
