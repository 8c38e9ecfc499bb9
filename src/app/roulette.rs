// Lucky-numbers roulette
//
// Purely decorative: a digit-spin animation followed by four unique lucky
// numbers and a confetti shower. It owns no shared data, so nothing it does
// can affect the results pipeline.

use rand::Rng;
use std::time::{Duration, Instant};

/// How long the digits shuffle before revealing
pub const SPIN_DURATION: Duration = Duration::from_secs(3);

/// Face shuffle rate while spinning
const SHUFFLE_EVERY: Duration = Duration::from_millis(50);

const CONFETTI_COUNT: usize = 50;
const CONFETTI_SPAWN_STAGGER_MS: u64 = 30;

/// Congratulatory captions, picked at random on reveal
pub const MESSAGES: [&str; 6] = [
    "¡Estos son tus números ganadores!",
    "¡La suerte está de tu lado!",
    "¡Números mágicos para ti!",
    "¡Que la fortuna te acompañe!",
    "¡Confía en estos números!",
    "¡Tu día de suerte ha llegado!",
];

/// One falling confetti particle. Position is derived from elapsed time at
/// render, so particles need no per-tick mutation.
#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    /// Horizontal position as a fraction of the overlay width
    pub column: f32,
    /// Delay after the reveal before this particle appears
    pub spawn_delay: Duration,
    /// Time the particle takes to cross the overlay top to bottom
    pub fall_time: Duration,
    /// Index into the confetti palette
    pub color: usize,
}

#[derive(Debug)]
pub enum RoulettePhase {
    Idle,
    Spinning {
        started: Instant,
        face: u32,
        last_shuffle: Instant,
    },
    Revealed {
        numbers: [u8; 4],
        message: &'static str,
        revealed_at: Instant,
        confetti: Vec<Confetti>,
    },
}

#[derive(Debug)]
pub struct Roulette {
    pub open: bool,
    pub phase: RoulettePhase,
}

impl Roulette {
    pub fn new() -> Self {
        Self {
            open: false,
            phase: RoulettePhase::Idle,
        }
    }

    /// Show or hide the overlay. Opening resets the display to its idle
    /// face; a spin in progress keeps running behind a closed overlay and
    /// is simply discarded on reopen.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        if self.open {
            self.phase = RoulettePhase::Idle;
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, RoulettePhase::Spinning { .. })
    }

    /// Start a spin. Re-triggering while already spinning is ignored.
    pub fn spin(&mut self) {
        if self.is_spinning() {
            return;
        }
        let now = Instant::now();
        self.phase = RoulettePhase::Spinning {
            started: now,
            face: rand::thread_rng().gen_range(0..1000),
            last_shuffle: now,
        };
    }

    /// Drive the animation: shuffle the face while spinning, reveal after
    /// the spin duration elapses.
    pub fn on_tick(&mut self) {
        if let RoulettePhase::Spinning {
            started,
            face,
            last_shuffle,
        } = &mut self.phase
        {
            if started.elapsed() >= SPIN_DURATION {
                self.phase = reveal();
            } else if last_shuffle.elapsed() >= SHUFFLE_EVERY {
                *face = rand::thread_rng().gen_range(0..1000);
                *last_shuffle = Instant::now();
            }
        }
    }
}

impl Default for Roulette {
    fn default() -> Self {
        Self::new()
    }
}

fn reveal() -> RoulettePhase {
    let mut rng = rand::thread_rng();

    let mut numbers: Vec<u8> = Vec::with_capacity(4);
    while numbers.len() < 4 {
        let candidate = rng.gen_range(0..100u8);
        if !numbers.contains(&candidate) {
            numbers.push(candidate);
        }
    }
    let numbers = [numbers[0], numbers[1], numbers[2], numbers[3]];

    let message = MESSAGES[rng.gen_range(0..MESSAGES.len())];

    let confetti = (0..CONFETTI_COUNT)
        .map(|i| Confetti {
            column: rng.gen_range(0.0..1.0),
            spawn_delay: Duration::from_millis(i as u64 * CONFETTI_SPAWN_STAGGER_MS),
            fall_time: Duration::from_millis(rng.gen_range(2000..4000)),
            color: rng.gen_range(0..crate::theme::CONFETTI_COLORS.len()),
        })
        .collect();

    RoulettePhase::Revealed {
        numbers,
        message,
        revealed_at: Instant::now(),
        confetti,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_is_guarded_against_reentry() {
        let mut roulette = Roulette::new();
        roulette.spin();
        let first_start = match &roulette.phase {
            RoulettePhase::Spinning { started, .. } => *started,
            other => panic!("expected spinning, got {:?}", other),
        };

        // A second trigger while busy must not restart the animation
        roulette.spin();
        match &roulette.phase {
            RoulettePhase::Spinning { started, .. } => assert_eq!(*started, first_start),
            other => panic!("expected spinning, got {:?}", other),
        }
    }

    #[test]
    fn reveal_produces_four_unique_numbers_in_range() {
        for _ in 0..50 {
            match reveal() {
                RoulettePhase::Revealed {
                    numbers, message, ..
                } => {
                    for n in numbers {
                        assert!(n < 100);
                    }
                    for i in 0..4 {
                        for j in (i + 1)..4 {
                            assert_ne!(numbers[i], numbers[j]);
                        }
                    }
                    assert!(MESSAGES.contains(&message));
                }
                other => panic!("expected revealed, got {:?}", other),
            }
        }
    }

    #[test]
    fn opening_resets_to_idle() {
        let mut roulette = Roulette::new();
        roulette.spin();
        roulette.toggle_open();
        assert!(roulette.open);
        assert!(matches!(roulette.phase, RoulettePhase::Idle));

        roulette.toggle_open();
        assert!(!roulette.open);
    }

    #[test]
    fn spin_reveals_after_the_spin_duration() {
        let mut roulette = Roulette::new();
        roulette.spin();

        // Force the started timestamp into the past instead of sleeping
        if let RoulettePhase::Spinning { started, .. } = &mut roulette.phase {
            *started = Instant::now() - SPIN_DURATION - Duration::from_millis(1);
        }
        roulette.on_tick();
        assert!(matches!(roulette.phase, RoulettePhase::Revealed { .. }));
    }
}
