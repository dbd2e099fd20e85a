// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::io;

use thiserror::Error;

/// Error type returned by receiver control operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Peer closed or reset the connection mid-exchange. Never retried; the
    /// caller must reconnect.
    #[error("connection to receiver lost")]
    LostConnection,

    /// Peer answered with the failure marker. Never retried.
    #[error("receiver rejected command `{command}`")]
    Command { command: &'static str },

    /// Every attempt's read phase hit the read timeout.
    #[error("no response from receiver after {tries} attempt(s)")]
    Timeout { tries: u32 },

    /// Identification reply from the version handshake did not look like a
    /// Gqrx instance.
    #[error("unexpected identification from peer: `{0}`")]
    Handshake(String),

    /// A reply line that was required to be numeric could not be parsed.
    #[error("malformed numeric reply `{value}`")]
    Parse { value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ControlResult<T> = Result<T, ControlError>;
