// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Typed command facade over the protocol engine.
//!
//! Every operation is one exchange: encode the arguments, run it through the
//! connection, parse the reply lines. Retry behavior lives entirely in the
//! engine; nothing here keeps state beyond the connection itself.

use std::str::FromStr;

use gqrxctl_protocol::ReceiverCommand;

use crate::config::ConnectionConfig;
use crate::connection::Connection;
use crate::error::{ControlError, ControlResult};
use crate::freq::Freq;

/// Remote-controlled Gqrx receiver.
#[derive(Debug)]
pub struct Receiver {
    conn: Connection,
}

impl Receiver {
    /// Connect and run the version handshake.
    pub async fn connect(config: &ConnectionConfig) -> ControlResult<Self> {
        Ok(Self {
            conn: Connection::open(config).await?,
        })
    }

    /// Identification line captured during the connect handshake.
    pub fn version(&self) -> &str {
        self.conn.ident()
    }

    /// Current hardware frequency in MHz.
    pub async fn get_freq(&mut self) -> ControlResult<f64> {
        let reply = self.conn.exchange(&ReceiverCommand::GetFreq).await?;
        let hz: u64 = parse_num(first(reply)?)?;
        Ok(Freq::new(hz).mhz())
    }

    /// Tune to the given frequency in MHz, truncated to whole hertz.
    pub async fn set_freq(&mut self, mhz: f64) -> ControlResult<()> {
        let freq = Freq::from_mhz(mhz);
        self.conn
            .exchange(&ReceiverCommand::SetFreq { hz: freq.hz })
            .await?;
        Ok(())
    }

    /// Current demodulator as reported: mode name and passband, both raw.
    pub async fn get_demod(&mut self) -> ControlResult<(String, String)> {
        let reply = self.conn.exchange(&ReceiverCommand::GetDemod).await?;
        let mut lines = reply.into_iter();
        match (lines.next(), lines.next()) {
            (Some(mode), Some(passband)) => Ok((mode, passband)),
            _ => Err(ControlError::Parse {
                value: String::new(),
            }),
        }
    }

    /// Select a demodulator by its Gqrx mode name (e.g. `FM`, `USB`).
    pub async fn set_demod(&mut self, mode: &str) -> ControlResult<()> {
        self.conn
            .exchange(&ReceiverCommand::SetDemod {
                mode: mode.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Signal strength in dBFS, as the raw reply text.
    pub async fn signal_strength(&mut self) -> ControlResult<String> {
        let reply = self
            .conn
            .exchange(&ReceiverCommand::GetSignalStrength)
            .await?;
        first(reply)
    }

    /// Squelch threshold in dB.
    pub async fn get_squelch(&mut self) -> ControlResult<f64> {
        let reply = self.conn.exchange(&ReceiverCommand::GetSquelch).await?;
        parse_num(first(reply)?)
    }

    /// Set the squelch threshold in dB.
    pub async fn set_squelch(&mut self, level: f64) -> ControlResult<()> {
        self.conn
            .exchange(&ReceiverCommand::SetSquelch { level })
            .await?;
        Ok(())
    }

    pub async fn start_recording(&mut self) -> ControlResult<()> {
        self.conn.exchange(&ReceiverCommand::StartRecording).await?;
        Ok(())
    }

    pub async fn stop_recording(&mut self) -> ControlResult<()> {
        self.conn.exchange(&ReceiverCommand::StopRecording).await?;
        Ok(())
    }

    /// Recorder state as reported by the peer (0 idle, 1 recording).
    pub async fn recording_status(&mut self) -> ControlResult<i32> {
        let reply = self.conn.exchange(&ReceiverCommand::RecordingStatus).await?;
        parse_num(first(reply)?)
    }

    /// Send the quit command and release the connection.
    pub async fn close(self) {
        self.conn.close().await;
    }
}

fn first(reply: Vec<String>) -> ControlResult<String> {
    reply.into_iter().next().ok_or_else(|| ControlError::Parse {
        value: String::new(),
    })
}

fn parse_num<T: FromStr>(value: String) -> ControlResult<T> {
    value
        .parse()
        .map_err(|_| ControlError::Parse { value })
}
