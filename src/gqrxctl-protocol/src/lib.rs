// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Wire-level surface of the Gqrx remote-control protocol.
//!
//! Requests are single newline-terminated ASCII lines; replies are zero or
//! more lines, with two reserved full-line markers (`RPRT 0` / `RPRT 1`)
//! carrying completion semantics. The command surface is closed: the enum in
//! [`command`] is the whole protocol, not an extensible schema.

pub mod command;
pub mod reply;

pub use command::{ReceiverCommand, IDENT_PREFIX};
pub use reply::{classify, ReplyLine, REPLY_ERR, REPLY_OK};
