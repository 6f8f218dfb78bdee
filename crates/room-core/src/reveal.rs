use crate::constants::{
    REVEAL_LEAD_IN_MS, REVEAL_MAX_DELAY_MS, REVEAL_MIN_DELAY_MS, REVEAL_SOUND_EVERY,
};
use rand::prelude::*;

/// Result of one reveal step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealStep {
    /// Characters revealed by this step.
    pub revealed: usize,
    /// Key sounds due by this step (one per `REVEAL_SOUND_EVERY` characters).
    pub key_sounds: usize,
}

/// Character-by-character text reveal with jittered per-character delays.
pub struct TypewriterReveal {
    chars: Vec<char>,
    shown: usize,
    next_due_ms: f64,
    rng: StdRng,
}

impl TypewriterReveal {
    pub fn new(text: &str, now_ms: f64, seed: u64) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            next_due_ms: now_ms + REVEAL_LEAD_IN_MS,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn step(&mut self, now_ms: f64) -> RevealStep {
        let mut out = RevealStep::default();
        while self.shown < self.chars.len() && now_ms >= self.next_due_ms {
            self.shown += 1;
            out.revealed += 1;
            if self.shown % REVEAL_SOUND_EVERY == 0 {
                out.key_sounds += 1;
            }
            self.next_due_ms += self.rng.gen_range(REVEAL_MIN_DELAY_MS..REVEAL_MAX_DELAY_MS);
        }
        out
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[inline]
    pub fn shown(&self) -> usize {
        self.shown
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.shown == self.chars.len()
    }
}
