// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Reply-line classification.
//!
//! The completion markers are ordinary lines that also carry control meaning.
//! A payload that happens to equal a marker cannot be told apart from one;
//! this is protocol-given behavior, not something the client can repair.

/// Full-line marker: command succeeded, no payload.
pub const REPLY_OK: &str = "RPRT 0";

/// Full-line marker: command failed; the exchange is aborted.
pub const REPLY_ERR: &str = "RPRT 1";

/// What one reply line means to the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyLine {
    /// Ordinary payload, kept in order.
    Payload,
    /// Success marker, consumed and excluded from the payload.
    Ok,
    /// Failure marker, aborts the whole exchange.
    Err,
}

/// Classify one reply line. Markers match exactly, full-line only.
pub fn classify(line: &str) -> ReplyLine {
    match line {
        REPLY_OK => ReplyLine::Ok,
        REPLY_ERR => ReplyLine::Err,
        _ => ReplyLine::Payload,
    }
}
