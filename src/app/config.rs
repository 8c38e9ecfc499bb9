// Application configuration
//
// Constants for the polling schedule and the UI loop. The draw schedule is
// fixed by the operator: three daily draws at 11:00, 15:00 and 21:00
// Honduras time, with results trickling in over the following half hour.

use chrono::{NaiveTime, Timelike};
use std::time::Duration;

/// Event-poll timeout of the UI loop; doubles as the animation tick
pub const UI_TICK: Duration = Duration::from_millis(100);

/// Hours (Honduras time) whose first half-hour is a draw window
pub const DRAW_WINDOW_HOURS: [u32; 3] = [11, 15, 21];

/// Last minute (inclusive) of a draw window
pub const DRAW_WINDOW_LAST_MINUTE: u32 = 30;

/// Poll every minute while a draw window is open
pub const DRAW_WINDOW_INTERVAL: Duration = Duration::from_secs(60);

/// Poll every five minutes the rest of the day
pub const IDLE_INTERVAL: Duration = Duration::from_secs(300);

/// Select the polling interval for the given local wall time. Called before
/// scheduling every cycle, so the schedule tightens and relaxes on its own.
pub fn poll_interval(local: NaiveTime) -> Duration {
    let in_window = DRAW_WINDOW_HOURS
        .iter()
        .any(|&hour| local.hour() == hour && local.minute() <= DRAW_WINDOW_LAST_MINUTE);
    if in_window {
        DRAW_WINDOW_INTERVAL
    } else {
        IDLE_INTERVAL
    }
}
