// tests/support/mocks/time.rs
use async_trait::async_trait;
use autoblog::application::ports::time::{Clock, Timer};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Jumps the fake clock straight to each deadline. After `fire_limit`
/// wake-ups the next sleep never returns, leaving the caller armed.
pub struct FakeTimer {
    clock: Arc<FakeClock>,
    deadlines: Mutex<Vec<DateTime<Utc>>>,
    fire_limit: usize,
    armed: Notify,
}

impl FakeTimer {
    pub fn new(clock: Arc<FakeClock>, fire_limit: usize) -> Self {
        Self {
            clock,
            deadlines: Mutex::new(Vec::new()),
            fire_limit,
            armed: Notify::new(),
        }
    }

    pub fn deadlines(&self) -> Vec<DateTime<Utc>> {
        self.deadlines.lock().unwrap().clone()
    }

    pub async fn wait_for_armings(&self, count: usize) {
        loop {
            let notified = self.armed.notified();
            if self.deadlines.lock().unwrap().len() >= count {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl Timer for FakeTimer {
    async fn sleep_until(&self, deadline: DateTime<Utc>) {
        let armed = {
            let mut deadlines = self.deadlines.lock().unwrap();
            deadlines.push(deadline);
            deadlines.len()
        };
        self.armed.notify_one();

        if armed > self.fire_limit {
            std::future::pending::<()>().await;
        }
        self.clock.set(deadline);
        tokio::task::yield_now().await;
    }
}
