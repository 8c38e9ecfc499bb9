// Polling controller
//
// Owns the tokio runtime and the fetch schedule. The UI loop stays
// synchronous; each tick it asks the poller to start a cycle if one is due
// and drains whatever outcomes have arrived. Starting a cycle aborts any
// fetch still in flight, and a generation counter guarantees a superseded
// fetch can never apply even if its outcome was already queued.

use crate::app::config::poll_interval;
use crate::feed::{self, Envelope, FeedError};
use chrono::NaiveTime;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Upstream is a static JSON file behind a CDN; anything slower than this
/// is a dead connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

struct CycleOutcome {
    generation: u64,
    result: Result<Envelope, FeedError>,
}

pub struct Poller {
    runtime: Runtime,
    client: reqwest::Client,
    endpoint: String,
    tx: mpsc::UnboundedSender<CycleOutcome>,
    rx: mpsc::UnboundedReceiver<CycleOutcome>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    next_due: Instant,
}

impl Poller {
    pub fn new(endpoint: String) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            client,
            endpoint,
            tx,
            rx,
            generation: 0,
            in_flight: None,
            // First fetch fires on the first tick
            next_due: Instant::now(),
        })
    }

    /// Advance the schedule and collect finished cycles. While paused no
    /// cycle starts, but already-arrived outcomes still drain so a fetch
    /// that completed just before pausing is not lost.
    pub fn tick(
        &mut self,
        paused: bool,
        local_time: NaiveTime,
    ) -> Vec<Result<Envelope, FeedError>> {
        if !paused && Instant::now() >= self.next_due {
            self.start_cycle(local_time);
        }

        let mut fresh = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation == self.generation {
                self.in_flight = None;
                fresh.push(outcome.result);
            } else {
                // Superseded cycle; its result must never render
                tracing::debug!(
                    generation = outcome.generation,
                    current = self.generation,
                    "dropping stale poll outcome"
                );
            }
        }
        fresh
    }

    /// Make the next tick fetch immediately (resume from pause).
    pub fn poke(&mut self) {
        self.next_due = Instant::now();
    }

    fn start_cycle(&mut self, local_time: NaiveTime) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "superseding in-flight fetch");
        }

        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let tx = self.tx.clone();

        self.in_flight = Some(self.runtime.spawn(async move {
            let result = feed::fetch_results(&client, &endpoint).await;
            if let Err(err) = &result {
                tracing::warn!(generation, error = %err, "poll cycle failed");
            }
            // Receiver gone means the app is shutting down
            let _ = tx.send(CycleOutcome { generation, result });
        }));

        // Re-evaluated every cycle: the schedule tightens inside draw windows
        let interval = poll_interval(local_time);
        self.next_due = Instant::now() + interval;
        tracing::debug!(generation, interval_secs = interval.as_secs(), "poll cycle started");
    }
}
