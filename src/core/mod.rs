use crate::utils::format::parse_timestamp;

pub mod absolute;
pub mod since;

/// Milliseconds since epoch, as stamped by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = crate::TimesinceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_timestamp(s)?))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wall-clock source, injected so displays can be driven in tests.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Text-content write surface owned by a display. The only externally
/// observable output of either display mode.
pub trait RenderSink: Send + Sync {
    fn render(&self, text: &str);
}
