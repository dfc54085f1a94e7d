// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]

/// Capacity of the receive accumulator in bytes.
/// An inbound frame longer than this is delivered as a full frame and the
/// accumulator restarts from empty.
pub const RX_BUFFER_LEN: usize = 40;

/// Number of completed frames buffered between the receive path and the
/// consumer. Frames completed while the queue is full are dropped.
pub const FRAME_QUEUE_DEPTH: usize = 4;

/// Longest encoded AT command.
/// `AT+NAME` (7 bytes) plus a name of up to [`NAME_MAX_LEN`] bytes.
pub const AT_CMD_MAX_LEN: usize = 20;

/// Maximum device-name length accepted by `AT+NAME`.
/// The classic HC-06 firmware truncates anything longer.
pub const NAME_MAX_LEN: usize = 13;

/// Exact pairing-PIN length accepted by `AT+PIN`.
pub const PIN_LEN: usize = 4;

/// Byte that terminates an inbound data-mode frame (LF).
/// AT acknowledgements carry no terminator and are matched by length
/// instead.
pub const FRAME_TERMINATOR: u8 = 0x0A;

/// Default wait for an AT acknowledgement, in milliseconds.
/// The HC-06 replies well under a second; two seconds covers a module that
/// is still settling after power-up.
pub const RESPONSE_TIMEOUT_MS: u64 = 2000;

/// Delay after flushing the line during init before the module accepts
/// commands, in milliseconds.
pub const SETTLE_DELAY_MS: u64 = 500;
