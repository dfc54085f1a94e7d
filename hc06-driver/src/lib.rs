// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async driver for the HC-06 Bluetooth serial module.
//!
//! The HC-06 bridges a UART to a Bluetooth SPP link. Anything written to
//! the UART goes out over the air, anything received over the air comes in
//! on the UART, and while the module is unpaired a handful of bare ASCII
//! AT commands configure it (see [`hc06_protocol`]).
//!
//! The driver is platform-agnostic: it talks to the module through the
//! [`embedded_io_async`] `Read`/`Write` traits, so any HAL with a
//! buffered, interrupt-driven UART will do (embassy-nrf `BufferedUarte`,
//! embassy-stm32 `Uart`, ...). Inbound bytes run through a fixed-capacity
//! [accumulator](rx::Accumulator) that completes a frame on LF or when the
//! buffer fills, and completed frames queue up in a small
//! [ring](queue::FrameQueue) until the caller takes them.
//!
//! ```ignore
//! let mut bt = Hc06::new(uart, Config::default());
//! bt.init().await?;
//! bt.test().await?;
//! bt.set_name("robot-arm").await?;
//! bt.write_str("hello over SPP").await?;
//! let frame = bt.read_frame().await?;
//! ```

#![cfg_attr(not(test), no_std)]

// This must go first, other modules use the logging macros.
mod fmt;

pub mod queue;
pub mod rx;

pub use hc06_protocol::{BaudRate, Command, EncodeError, UnsupportedBaud};

use consts::{FRAME_QUEUE_DEPTH, RESPONSE_TIMEOUT_MS, RX_BUFFER_LEN, SETTLE_DELAY_MS};
use embassy_time::{with_deadline, Duration, Instant, Timer};
use embedded_io_async::{Read, Write};

use queue::FrameQueue;
use rx::Accumulator;

/// A completed inbound data-mode frame at driver capacity.
pub type Message = rx::Frame<RX_BUFFER_LEN>;

/// Driver tuning.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// How long a configuration command waits for its acknowledgement.
    pub response_timeout: Duration,
    /// Settle time after [`Hc06::init`] flushes the line.
    pub settle_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            response_timeout: Duration::from_millis(RESPONSE_TIMEOUT_MS),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }
}

/// Driver errors. `E` is the underlying UART error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Underlying UART transfer failed.
    Uart(E),
    /// No acknowledgement within the response timeout.
    Timeout,
    /// Module answered with something other than the expected
    /// acknowledgement.
    UnexpectedResponse,
    /// Command argument rejected before anything was transmitted.
    Encode(EncodeError),
}

impl<E> From<EncodeError> for Error<E> {
    fn from(e: EncodeError) -> Self {
        Error::Encode(e)
    }
}

/// HC-06 driver over an async UART.
pub struct Hc06<U> {
    uart: U,
    acc: Accumulator<RX_BUFFER_LEN>,
    frames: FrameQueue<FRAME_QUEUE_DEPTH, RX_BUFFER_LEN>,
    config: Config,
}

impl<U: Read + Write> Hc06<U> {
    pub fn new(uart: U, config: Config) -> Self {
        Self {
            uart,
            acc: Accumulator::new(),
            frames: FrameQueue::new(),
            config,
        }
    }

    /// Driver with stock timeouts.
    pub fn new_default(uart: U) -> Self {
        Self::new(uart, Config::default())
    }

    /// Flushes the module's line state and gives it time to settle.
    ///
    /// The UART itself must already be configured (8N1, no flow control)
    /// at the rate the module currently uses.
    pub async fn init(&mut self) -> Result<(), Error<U::Error>> {
        self.write_all(b"\n\r").await?;
        self.clear_rx_buffer();
        Timer::after(self.config.settle_delay).await;
        info!("hc06 ready");
        Ok(())
    }

    /// Transmits a single byte.
    pub async fn write_byte(&mut self, byte: u8) -> Result<(), Error<U::Error>> {
        self.write_all(&[byte]).await
    }

    /// Transmits a string as raw data.
    pub async fn write_str(&mut self, s: &str) -> Result<(), Error<U::Error>> {
        self.write_all(s.as_bytes()).await
    }

    /// Discards the frame in progress and everything queued.
    pub fn clear_rx_buffer(&mut self) {
        self.acc.clear();
        self.frames.clear();
    }

    /// Takes a queued frame without touching the UART.
    pub fn try_take_frame(&mut self) -> Option<Message> {
        self.frames.pop()
    }

    /// Returns the next completed data-mode frame, reading from the UART
    /// as needed. Queued frames are served first.
    pub async fn read_frame(&mut self) -> Result<Message, Error<U::Error>> {
        loop {
            if let Some(frame) = self.frames.pop() {
                return Ok(frame);
            }
            self.pump().await?;
        }
    }

    /// Sends `AT`, expects `OK`.
    pub async fn test(&mut self) -> Result<(), Error<U::Error>> {
        self.command(Command::Test).await
    }

    /// Asks the module to switch its serial rate.
    ///
    /// The acknowledgement still arrives at the old rate; reconfigure the
    /// UART once this returns. The change survives power cycles.
    pub async fn set_baud(&mut self, baud: BaudRate) -> Result<(), Error<U::Error>> {
        self.command(Command::SetBaud(baud)).await
    }

    /// Changes the advertised device name (up to 13 bytes).
    pub async fn set_name(&mut self, name: &str) -> Result<(), Error<U::Error>> {
        self.command(Command::SetName(name)).await
    }

    /// Changes the pairing PIN (exactly four ASCII digits).
    pub async fn set_pin(&mut self, pin: &str) -> Result<(), Error<U::Error>> {
        self.command(Command::SetPin(pin)).await
    }

    /// Gives the UART back.
    pub fn release(self) -> U {
        self.uart
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), Error<U::Error>> {
        self.uart.write_all(bytes).await.map_err(Error::Uart)?;
        self.uart.flush().await.map_err(Error::Uart)?;
        Ok(())
    }

    /// Shared command path: clear receive state, transmit, then collect
    /// the acknowledgement under a single deadline.
    async fn command(&mut self, cmd: Command<'_>) -> Result<(), Error<U::Error>> {
        let encoded = cmd.encode()?;
        let ack = cmd.ack().as_bytes();

        self.clear_rx_buffer();
        debug!("command {}", encoded.as_str());
        self.write_all(encoded.as_bytes()).await?;

        // Acknowledgements carry no terminator, so they pile up as pending
        // bytes and are matched by length. A stray LF restarts the
        // accumulator and the wait runs into the deadline, same as the
        // module staying silent.
        let deadline = Instant::now() + self.config.response_timeout;
        while self.acc.len() < ack.len() {
            match with_deadline(deadline, self.pump()).await {
                Ok(res) => {
                    res?;
                }
                Err(_) => {
                    warn!("command timed out");
                    return Err(Error::Timeout);
                }
            }
        }

        if &self.acc.pending()[..ack.len()] == ack {
            // take the ack, any surplus stays for the data path
            self.acc.consume(ack.len());
            Ok(())
        } else {
            warn!("unexpected response");
            Err(Error::UnexpectedResponse)
        }
    }

    /// Reads whatever the UART has and feeds it through the accumulator,
    /// queueing any frames that complete.
    async fn pump(&mut self) -> Result<(), Error<U::Error>> {
        let mut raw = [0u8; 16];
        let n = self.uart.read(&mut raw).await.map_err(Error::Uart)?;
        trace!("rx {} bytes", n);
        for &byte in &raw[..n] {
            #[cfg(feature = "echo")]
            {
                if byte == b'\r' {
                    self.uart.write_all(b"\n").await.map_err(Error::Uart)?;
                }
                self.uart.write_all(&[byte]).await.map_err(Error::Uart)?;
            }
            if let Some(frame) = self.acc.push(byte) {
                if !self.frames.push(&frame) {
                    warn!("rx frame dropped, queue full");
                }
            }
        }
        Ok(())
    }
}
