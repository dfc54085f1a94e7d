// SPDX-FileCopyrightText: 2026 hc06-uart contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configure an HC-06 module from a PC serial adapter.
//!
//! The module only takes AT commands while unpaired, so run this with
//! nothing connected to it over Bluetooth.

use clap::{Parser, ValueEnum};
use hc06_protocol::{BaudRate, Command};
use std::error::Error;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::SerialPortBuilderExt;

#[derive(Clone, Debug, PartialEq, ValueEnum)]
enum Action {
    /// Send `AT`, expect `OK`
    Test,
    /// Change the module baud rate (pass the rate in bps as --value)
    SetBaud,
    /// Change the advertised name (--value)
    SetName,
    /// Change the pairing PIN (--value, four digits)
    SetPin,
    /// Transmit --value as raw data
    Send,
    /// Print whatever the module sends
    Listen,
}

#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long)]
    list_ports: bool,
    #[arg(short, long, default_value_t = String::from("/dev/ttyUSB0"))]
    port: String,
    #[arg(short, long, default_value_t = 9600)]
    baudrate: u32,
    #[arg(short, long, value_enum)]
    action: Option<Action>,
    #[arg(short, long)]
    value: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let args = Args::parse();

    if args.list_ports {
        let ports = tokio_serial::available_ports()?;
        println!("List of available serial ports:");
        for port in ports {
            println!("- {}", port.port_name);
        }
        return Ok(());
    }

    let Some(action) = args.action else {
        println!("Nothing to do, pass --action");
        return Ok(());
    };

    let mut serial = tokio_serial::new(&args.port, args.baudrate).open_native_async()?;
    let value = args.value.unwrap_or_default();

    match action {
        Action::Test => run_command(&mut serial, Command::Test).await?,
        Action::SetBaud => {
            let bps: u32 = value.parse()?;
            let baud = BaudRate::try_from(bps).map_err(|e| format!("{e:?}"))?;
            run_command(&mut serial, Command::SetBaud(baud)).await?;
            println!("Module now talks at {} bps, reopen the port accordingly", baud.bps());
        }
        Action::SetName => run_command(&mut serial, Command::SetName(&value)).await?,
        Action::SetPin => run_command(&mut serial, Command::SetPin(&value)).await?,
        Action::Send => {
            serial.write_all(value.as_bytes()).await?;
            serial.flush().await?;
            println!("Sent {} bytes", value.len());
        }
        Action::Listen => {
            let mut buf = [0; 512];
            loop {
                let n = serial.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                print!("{}", String::from_utf8_lossy(&buf[..n]));
            }
        }
    }

    Ok(())
}

async fn run_command(
    serial: &mut tokio_serial::SerialStream,
    cmd: Command<'_>,
) -> Result<(), Box<dyn Error>> {
    let encoded = cmd.encode().map_err(|e| format!("{e:?}"))?;
    println!(">>{}", encoded.as_str());
    serial.write_all(encoded.as_bytes()).await?;
    serial.flush().await?;

    // Collect the acknowledgement, it can arrive split across reads
    let expected = cmd.ack().as_bytes();
    let mut buf = [0; 64];
    let mut got = 0;
    while got < expected.len() {
        let n = match tokio::time::timeout(
            Duration::from_secs(2),
            serial.read(&mut buf[got..]),
        )
        .await
        {
            Ok(n) => n?,
            Err(_) => {
                println!("No response from module");
                return Ok(());
            }
        };
        if n == 0 {
            break;
        }
        got += n;
    }

    if &buf[..expected.len().min(got)] == expected {
        println!("<<{} (ok)", cmd.ack());
    } else {
        println!("<<{:02x?} (unexpected)", &buf[..got]);
    }
    Ok(())
}
