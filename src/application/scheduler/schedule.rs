use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// A fixed wall-clock time of day in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
    offset: FixedOffset,
}

impl DailySchedule {
    pub const fn new(at: NaiveTime, offset: FixedOffset) -> Self {
        Self { at, offset }
    }

    pub const fn at(&self) -> NaiveTime {
        self.at
    }

    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// First firing instant strictly after `now`. A missed firing is never
    /// returned, so a process started after today's slot waits for tomorrow.
    pub fn next_fire_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.with_timezone(&self.offset).date_naive().and_time(self.at);
        let candidate = self.to_utc(today);
        if candidate > now {
            candidate
        } else {
            self.to_utc(today + TimeDelta::days(1))
        }
    }

    fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        (local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()))).and_utc()
    }
}
