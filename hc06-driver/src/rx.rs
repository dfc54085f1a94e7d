// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Receive accumulator.
//!
//! Inbound bytes are collected one at a time until a frame completes,
//! either on the LF terminator or when the buffer fills. AT
//! acknowledgements carry no terminator; they stay [`pending`] and are
//! matched by length in the command path.
//!
//! [`pending`]: Accumulator::pending

use consts::FRAME_TERMINATOR;
use heapless::Vec;

/// A completed inbound frame. The terminator byte is not included.
pub type Frame<const N: usize> = Vec<u8, N>;

/// Fixed-capacity byte accumulator, safe to drive from a single interrupt
/// context: no allocation, no blocking.
#[derive(Debug, Default)]
pub struct Accumulator<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> Accumulator<N> {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Feeds one received byte.
    ///
    /// Returns the completed frame when `byte` is the terminator (an empty
    /// frame for a bare LF is still delivered) or when the buffer fills,
    /// in which case the frame carries all `N` bytes.
    pub fn push(&mut self, byte: u8) -> Option<Frame<N>> {
        if byte == FRAME_TERMINATOR {
            return Some(core::mem::take(&mut self.buf));
        }
        // cannot fail: the buffer is handed off the moment it fills
        let _ = self.buf.push(byte);
        if self.buf.is_full() {
            return Some(core::mem::take(&mut self.buf));
        }
        None
    }

    /// Bytes collected so far for the frame in progress.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    /// Drops the first `n` pending bytes, keeping the rest. Used by the
    /// command path to take a matched acknowledgement while leaving any
    /// surplus for the data path.
    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.buf.len());
        let len = self.buf.len();
        self.buf.copy_within(n.., 0);
        self.buf.truncate(len - n);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
