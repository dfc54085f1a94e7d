// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Completed-frame handoff between the receive path and the foreground.
//!
//! Lock-free single-producer single-consumer ring. The producer is the
//! receive path (interrupt handler or async task), the consumer is the
//! foreground. Frames completed while the ring is full are dropped and
//! counted.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::rx::Frame;

/// Ring of `N` slots, each holding a frame of up to `M` bytes.
pub struct FrameQueue<const N: usize, const M: usize> {
    head: AtomicUsize,
    tail: AtomicUsize,
    dropped: AtomicUsize,
    slots: [Slot<M>; N],
}

struct Slot<const M: usize> {
    buf: UnsafeCell<[u8; M]>,
    len: AtomicUsize,
    full: AtomicBool,
}

impl<const M: usize> Slot<M> {
    const fn new() -> Self {
        Self {
            buf: UnsafeCell::new([0; M]),
            len: AtomicUsize::new(0),
            full: AtomicBool::new(false),
        }
    }
}

impl<const N: usize, const M: usize> FrameQueue<N, M> {
    pub const fn new() -> Self {
        Self {
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
            slots: [const { Slot::new() }; N],
        }
    }

    #[inline]
    fn next(idx: usize) -> usize {
        (idx + 1) % N
    }

    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    pub fn is_full(&self) -> bool {
        Self::next(self.tail.load(Ordering::Acquire)) == self.head.load(Ordering::Acquire)
    }

    /// Frames dropped because the ring was full.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Producer: enqueues a completed frame. Bytes beyond `M` are
    /// truncated. Returns `false` when the ring is full and the frame was
    /// dropped.
    pub fn push(&self, frame: &[u8]) -> bool {
        if self.is_full() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        let tail = self.tail.load(Ordering::Relaxed);
        let slot = &self.slots[tail];
        if slot.full.load(Ordering::Acquire) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        let len = frame.len().min(M);
        // SAFETY: only the producer touches this slot until `full` is set
        unsafe {
            (&mut (*slot.buf.get()))[..len].copy_from_slice(&frame[..len]);
        }
        slot.len.store(len, Ordering::Release);
        slot.full.store(true, Ordering::Release);
        self.tail.store(Self::next(tail), Ordering::Release);
        true
    }

    /// Consumer: takes the oldest queued frame.
    pub fn pop(&self) -> Option<Frame<M>> {
        if self.is_empty() {
            return None;
        }
        let head = self.head.load(Ordering::Relaxed);
        let slot = &self.slots[head];
        if !slot.full.load(Ordering::Acquire) {
            return None;
        }
        let len = slot.len.load(Ordering::Acquire);
        // SAFETY: the slot is full, the producer leaves it alone until
        // `full` is cleared
        let buf = unsafe { &*slot.buf.get() };
        let frame = Frame::from_slice(&buf[..len]).ok()?;
        slot.full.store(false, Ordering::Release);
        self.head.store(Self::next(head), Ordering::Release);
        Some(frame)
    }

    /// Consumer: discards everything queued.
    pub fn clear(&self) {
        while self.pop().is_some() {}
    }
}

// Safety: SPSC only — one producer context, one consumer context.
unsafe impl<const N: usize, const M: usize> Sync for FrameQueue<N, M> {}
