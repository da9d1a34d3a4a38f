//! Next-piece queue with a 7-bag randomizer
//!
//! Every bag holds each of the seven kinds once, shuffled. Bags are appended
//! whenever the queue shrinks to the preview length, so the preview is always
//! fully populated.
//!
//! Shuffling uses a small LCG so that a seed reproduces the same sequence.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Numerical Recipes LCG
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would never leave zero.
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Fisher-Yates
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u32() % (i as u32 + 1)) as usize;
            items.swap(i, j);
        }
    }
}

#[derive(Debug, Clone)]
pub struct PieceQueue {
    queue: VecDeque<PieceKind>,
    preview_len: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    pub const DEFAULT_PREVIEW: usize = 5;

    pub fn new(seed: u32) -> Self {
        Self::with_preview(seed, Self::DEFAULT_PREVIEW)
    }

    pub fn with_preview(seed: u32, preview_len: usize) -> Self {
        let mut queue = Self {
            queue: VecDeque::with_capacity(preview_len + PieceKind::ALL.len()),
            preview_len,
            rng: SimpleRng::new(seed),
        };
        queue.refill();
        queue
    }

    fn refill(&mut self) {
        while self.queue.len() <= self.preview_len {
            let mut bag = PieceKind::ALL;
            self.rng.shuffle(&mut bag);
            self.queue.extend(bag);
        }
    }

    /// Take the next piece
    pub fn next(&mut self) -> PieceKind {
        // refill() keeps at least preview_len + 1 entries queued
        let kind = self.queue.pop_front().unwrap_or(PieceKind::I);
        self.refill();
        kind
    }

    /// Upcoming pieces, nearest first
    pub fn preview(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied().take(self.preview_len)
    }

    pub fn preview_len(&self) -> usize {
        self.preview_len
    }
}
