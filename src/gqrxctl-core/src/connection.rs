// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Protocol engine for the Gqrx remote-control link.
//!
//! One [`Connection`] owns one TCP stream and runs strictly serialized
//! exchanges: a command line out, a known number of reply lines back.
//! Responses carry no identifiers; they are matched to commands purely by
//! temporal ordering, so every method takes `&mut self` and a caller that
//! shares a connection across tasks must hold its own lock around each full
//! exchange.

use std::io::{self, ErrorKind};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use gqrxctl_protocol::{classify, ReceiverCommand, ReplyLine, IDENT_PREFIX};

use crate::config::ConnectionConfig;
use crate::error::{ControlError, ControlResult};

/// Exclusively-owned remote-control connection to a Gqrx instance.
#[derive(Debug)]
pub struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    tries: u32,
    read_timeout: Duration,
    ident: String,
}

impl Connection {
    /// Connect to the peer and validate it with a version-query exchange.
    ///
    /// The identification reply must start with `gqrx` (case-insensitive).
    /// Under [`ConnectionConfig::strict_handshake`] a mismatch fails the
    /// connect and drops the stream; otherwise it is logged and the
    /// connection stays usable.
    pub async fn open(config: &ConnectionConfig) -> ControlResult<Self> {
        let stream = TcpStream::connect(config.connect_addr()).await?;
        let (reader, writer) = stream.into_split();
        let mut conn = Self {
            reader: BufReader::new(reader),
            writer,
            tries: config.tries,
            read_timeout: config.read_timeout(),
            ident: String::new(),
        };

        let reply = conn.exchange(&ReceiverCommand::GetVersion).await?;
        let ident = reply.into_iter().next().unwrap_or_default();
        if !ident.to_lowercase().starts_with(IDENT_PREFIX) {
            if config.strict_handshake {
                return Err(ControlError::Handshake(ident));
            }
            warn!("peer identification does not look like gqrx: {:?}", ident);
        }
        info!("connected to gqrx: {}", ident);
        conn.ident = ident;
        Ok(conn)
    }

    /// Identification line returned by the peer during the connect handshake.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Serialize and write one request line. No reply is read.
    ///
    /// A write failure caused by the peer going away surfaces as
    /// [`ControlError::LostConnection`]; there is no automatic reconnect.
    pub async fn send_raw(&mut self, cmd: &ReceiverCommand) -> ControlResult<()> {
        let line = cmd.wire_line();
        debug!("sending command: {:?}", line.trim_end());
        let written = async {
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.flush().await
        }
        .await;
        written.map_err(|e| {
            if is_disconnect(&e) {
                ControlError::LostConnection
            } else {
                e.into()
            }
        })
    }

    /// Read one reply line, newline excluded, bounded by the read timeout.
    ///
    /// Times out as [`ControlError::Timeout`] without returning partial data;
    /// EOF mid-line means the peer went away and maps to
    /// [`ControlError::LostConnection`]. No line-length limit is enforced.
    pub async fn read_line(&mut self) -> ControlResult<String> {
        match timeout(self.read_timeout, read_until_newline(&mut self.reader)).await {
            Ok(Ok(line)) => Ok(line),
            Ok(Err(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(ControlError::LostConnection)
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(ControlError::Timeout { tries: 1 }),
        }
    }

    /// Run one full exchange with the connection's default retry count.
    pub async fn exchange(&mut self, cmd: &ReceiverCommand) -> ControlResult<Vec<String>> {
        let tries = self.tries;
        self.exchange_with_tries(cmd, tries).await
    }

    /// Run one full exchange: send the request, read the command's expected
    /// reply lines, interpret completion markers.
    ///
    /// A read timeout discards the attempt's partial payload and re-sends the
    /// whole command, immediately and up to `tries` times in total. The
    /// failure marker is never retried: it aborts the call on the current
    /// attempt, even when it arrives after valid payload lines. The returned
    /// payload excludes markers and may legitimately be empty.
    pub async fn exchange_with_tries(
        &mut self,
        cmd: &ReceiverCommand,
        tries: u32,
    ) -> ControlResult<Vec<String>> {
        let expected = cmd.reply_lines();

        for attempt in 1..=tries {
            debug!("command {}, try {}", cmd.code(), attempt);
            self.send_raw(cmd).await?;

            let mut payload = Vec::new();
            let mut timed_out = false;
            for index in 0..expected {
                let line = match self.read_line().await {
                    Ok(line) => line,
                    Err(ControlError::Timeout { .. }) => {
                        debug!("command {}, try {}: read timed out", cmd.code(), attempt);
                        timed_out = true;
                        break;
                    }
                    Err(e) => return Err(e),
                };
                debug!("line {}: {:?}", index, line);
                match classify(&line) {
                    ReplyLine::Err => {
                        return Err(ControlError::Command {
                            command: cmd.code(),
                        })
                    }
                    ReplyLine::Ok => continue,
                    ReplyLine::Payload => payload.push(line),
                }
            }

            if !timed_out {
                return Ok(payload);
            }
        }

        Err(ControlError::Timeout { tries })
    }

    /// Send the quit command and release the stream.
    ///
    /// The quit is fire-and-forget: its result is ignored and the stream is
    /// released on every path, including a send against a peer that is
    /// already gone.
    pub async fn close(mut self) {
        let _ = self.send_raw(&ReceiverCommand::Quit).await;
    }
}

/// Accumulate bytes up to the next `\n` (exclusive) and decode as text.
async fn read_until_newline(reader: &mut BufReader<OwnedReadHalf>) -> io::Result<String> {
    let mut line = Vec::with_capacity(64);
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "connection closed by receiver",
            ));
        }

        if let Some(pos) = available.iter().position(|b| *b == b'\n') {
            line.extend_from_slice(&available[..pos]);
            reader.consume(pos + 1);
            return String::from_utf8(line).map_err(|e| {
                io::Error::new(
                    ErrorKind::InvalidData,
                    format!("reply line is not valid UTF-8: {e}"),
                )
            });
        }

        line.extend_from_slice(available);
        let consumed = available.len();
        reader.consume(consumed);
    }
}

fn is_disconnect(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::UnexpectedEof
    )
}
