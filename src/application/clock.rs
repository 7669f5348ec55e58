// Wall-clock source for the refresh cycle
use chrono::{DateTime, FixedOffset, Local, Utc};

pub trait Clock: Send + Sync {
    /// Current instant carrying the local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// System time, in the host timezone unless an offset is pinned.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
