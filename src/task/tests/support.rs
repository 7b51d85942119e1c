//! Shared fixtures for task management unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::{
    adapters::memory::{InMemoryTaskRepository, StaticActorProvider},
    domain::ActorId,
    services::TaskManagementService,
};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    readings: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            readings: AtomicI64::new(0),
        }
    }

    /// Timestamp the `n`th reading (zero-based) returns.
    pub fn reading(&self, n: i64) -> DateTime<Utc> {
        self.start + chrono::Duration::seconds(n)
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
                .single()
                .expect("valid start timestamp"),
        )
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let n = self.readings.fetch_add(1, Ordering::SeqCst);
        self.reading(n)
    }
}

pub type TestService =
    TaskManagementService<InMemoryTaskRepository, StaticActorProvider, SteppingClock>;

pub fn actor(name: &str) -> ActorId {
    ActorId::new(name).expect("valid actor id")
}

pub fn service_for(name: &str) -> (TestService, Arc<SteppingClock>) {
    let clock = Arc::new(SteppingClock::default());
    let service = TaskManagementService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(StaticActorProvider::new(actor(name))),
        Arc::clone(&clock),
    );
    (service, clock)
}
