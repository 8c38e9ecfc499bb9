// Application state management
//
// AppState owns everything the UI draws: the current pipeline output, the
// wall clock, the pause flag and the roulette overlay. All mutation happens
// on the UI thread; the poller hands outcomes over through its channel.

pub mod config;
pub mod event;
pub mod roulette;

use crate::clock;
use crate::feed::{Envelope, FeedError};
use crate::pipeline::{self, Category, Grouped};
use crate::poller::Poller;
use chrono::{NaiveDate, Timelike};
use roulette::Roulette;

/// What the content area currently shows
#[derive(Debug)]
pub enum ContentState {
    /// Nothing fetched yet; the loading indicator is visible
    Loading,
    /// Grouped sections ready to render
    Ready(Grouped),
    /// The fetch succeeded but the category filtered everything out
    Empty,
    /// The last cycle failed; the message replaces the content area
    Failed(String),
}

pub struct AppState {
    pub running: bool,

    /// Polling and clock are suspended while paused
    pub paused: bool,

    /// Category shown by this instance; fixed at startup
    pub category: Category,

    pub content: ContentState,

    /// Last-updated label from the feed envelope, when present
    pub last_updated: Option<String>,

    pub clock_text: String,
    pub date_text: String,

    /// Second last written to the clock, to throttle formatting to 1 Hz
    last_clock_second: Option<u32>,

    /// Index of the first visible section
    pub scroll: usize,

    pub roulette: Roulette,
}

impl AppState {
    pub fn new(category: Category) -> Self {
        let now = clock::local_now();
        Self {
            running: true,
            paused: false,
            category,
            content: ContentState::Loading,
            last_updated: None,
            clock_text: clock::format_clock(now),
            date_text: clock::format_long_date(now),
            last_clock_second: Some(now.second()),
            scroll: 0,
            roulette: Roulette::new(),
        }
    }

    /// Per-frame update: clock, poll schedule and outcomes, animations.
    pub fn on_tick(&mut self, poller: &mut Poller) {
        let now = clock::local_now();

        if !self.paused && self.last_clock_second != Some(now.second()) {
            self.clock_text = clock::format_clock(now);
            self.date_text = clock::format_long_date(now);
            self.last_clock_second = Some(now.second());
        }

        for outcome in poller.tick(self.paused, now.time()) {
            self.apply_outcome(outcome, now.date_naive());
        }

        self.roulette.on_tick();
    }

    /// Run one cycle's result through the pipeline and swap the content.
    pub fn apply_outcome(
        &mut self,
        outcome: Result<Envelope, FeedError>,
        today: NaiveDate,
    ) {
        match outcome {
            Ok(envelope) => {
                let (results, last_updated) = envelope.into_parts();
                if last_updated.is_some() {
                    self.last_updated = last_updated;
                }

                let filtered = pipeline::filter_results(&results, self.category);
                if filtered.is_empty() {
                    self.content = ContentState::Empty;
                } else {
                    let mut entries = pipeline::to_entries(filtered);
                    pipeline::sort_entries(&mut entries, today);
                    self.content = ContentState::Ready(pipeline::group_by_slot(entries));
                }
                self.scroll = self.scroll.min(self.section_count().saturating_sub(1));
            }
            Err(err) => {
                self.content = ContentState::Failed(err.to_string());
                self.scroll = 0;
            }
        }
    }

    /// Suspend or resume polling and the clock. Resuming fires one
    /// immediate fetch so the display catches up right away.
    pub fn toggle_pause(&mut self, poller: &mut Poller) {
        self.paused = !self.paused;
        if !self.paused {
            poller.poke();
        }
        tracing::debug!(paused = self.paused, "pause toggled");
    }

    /// Number of non-empty sections in the current content
    pub fn section_count(&self) -> usize {
        match &self.content {
            ContentState::Ready(grouped) => grouped
                .slots()
                .iter()
                .filter(|(_, entries)| !entries.is_empty())
                .count(),
            _ => 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.section_count() {
            self.scroll += 1;
        }
    }
}
