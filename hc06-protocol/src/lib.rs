// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! AT command dialect of the HC-06 Bluetooth serial module.
//! The classic HC-06 firmware takes bare ASCII commands with no CR/LF and
//! answers with a fixed acknowledgement string per command. Commands are
//! only honoured while the module is unpaired.

#![cfg_attr(not(test), no_std)]

use consts::{AT_CMD_MAX_LEN, NAME_MAX_LEN, PIN_LEN};
use heapless::String;

#[cfg(test)]
mod tests;

/// Serial rates the HC-06 accepts via `AT+BAUDn`.
///
/// The module answers the baud command at the *old* rate; the new rate
/// takes effect for all traffic afterwards. 9600 is the factory default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudRate {
    B1200,
    B2400,
    B4800,
    #[default]
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
    B230400,
}

impl BaudRate {
    /// Encoded `AT+BAUDn` command selecting this rate.
    pub const fn command(self) -> &'static str {
        match self {
            BaudRate::B1200 => "AT+BAUD1",
            BaudRate::B2400 => "AT+BAUD2",
            BaudRate::B4800 => "AT+BAUD3",
            BaudRate::B9600 => "AT+BAUD4",
            BaudRate::B19200 => "AT+BAUD5",
            BaudRate::B38400 => "AT+BAUD6",
            BaudRate::B57600 => "AT+BAUD7",
            BaudRate::B115200 => "AT+BAUD8",
            BaudRate::B230400 => "AT+BAUD9",
        }
    }

    /// Acknowledgement the module sends once the rate is accepted.
    pub const fn ack(self) -> &'static str {
        match self {
            BaudRate::B1200 => "OK1200",
            BaudRate::B2400 => "OK2400",
            BaudRate::B4800 => "OK4800",
            BaudRate::B9600 => "OK9600",
            BaudRate::B19200 => "OK19200",
            BaudRate::B38400 => "OK38400",
            BaudRate::B57600 => "OK57600",
            BaudRate::B115200 => "OK115200",
            BaudRate::B230400 => "OK230400",
        }
    }

    /// Rate in bits per second.
    pub const fn bps(self) -> u32 {
        match self {
            BaudRate::B1200 => 1200,
            BaudRate::B2400 => 2400,
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
            BaudRate::B230400 => 230400,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = UnsupportedBaud;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        match bps {
            1200 => Ok(BaudRate::B1200),
            2400 => Ok(BaudRate::B2400),
            4800 => Ok(BaudRate::B4800),
            9600 => Ok(BaudRate::B9600),
            19200 => Ok(BaudRate::B19200),
            38400 => Ok(BaudRate::B38400),
            57600 => Ok(BaudRate::B57600),
            115200 => Ok(BaudRate::B115200),
            230400 => Ok(BaudRate::B230400),
            other => Err(UnsupportedBaud(other)),
        }
    }
}

/// Requested rate is not one of the nine the module supports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedBaud(pub u32);

/// Configuration commands understood by the HC-06.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Communication test, answered with `OK`.
    Test,
    /// Change the serial rate.
    SetBaud(BaudRate),
    /// Change the advertised device name (up to [`NAME_MAX_LEN`] bytes).
    SetName(&'a str),
    /// Change the pairing PIN (exactly [`PIN_LEN`] ASCII digits).
    SetPin(&'a str),
}

impl Command<'_> {
    /// Encodes the command into the bare ASCII form the module expects.
    pub fn encode(&self) -> Result<String<AT_CMD_MAX_LEN>, EncodeError> {
        let mut out = String::new();
        match self {
            Command::Test => {
                let _ = out.push_str("AT");
            }
            Command::SetBaud(baud) => {
                let _ = out.push_str(baud.command());
            }
            Command::SetName(name) => {
                if name.len() > NAME_MAX_LEN {
                    return Err(EncodeError::NameTooLong);
                }
                // 7 + NAME_MAX_LEN == AT_CMD_MAX_LEN, so this cannot overflow
                let _ = out.push_str("AT+NAME");
                let _ = out.push_str(name);
            }
            Command::SetPin(pin) => {
                if pin.len() != PIN_LEN || !pin.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(EncodeError::InvalidPin);
                }
                let _ = out.push_str("AT+PIN");
                let _ = out.push_str(pin);
            }
        }
        Ok(out)
    }

    /// Acknowledgement the module sends on success, casing as-is on the
    /// wire (`OKsetPIN` really is mixed case).
    pub const fn ack(&self) -> &'static str {
        match self {
            Command::Test => "OK",
            Command::SetBaud(baud) => baud.ack(),
            Command::SetName(_) => "OKsetname",
            Command::SetPin(_) => "OKsetPIN",
        }
    }
}

/// Command argument rejected before anything is put on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Device name longer than [`NAME_MAX_LEN`] bytes.
    NameTooLong,
    /// PIN is not exactly [`PIN_LEN`] ASCII digits.
    InvalidPin,
}
