// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

/// Expected case-insensitive prefix of the version-query reply.
pub const IDENT_PREFIX: &str = "gqrx";

/// Command understood by the Gqrx remote-control interface.
///
/// The protocol has no framing for reply length; each command implies how
/// many lines the peer sends back, captured in [`ReceiverCommand::reply_lines`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiverCommand {
    GetVersion,
    GetFreq,
    SetFreq { hz: u64 },
    GetDemod,
    SetDemod { mode: String },
    GetSignalStrength,
    GetSquelch,
    SetSquelch { level: f64 },
    StartRecording,
    StopRecording,
    RecordingStatus,
    Quit,
}

impl ReceiverCommand {
    /// Fixed leading token(s) of the request line, without per-call arguments.
    ///
    /// Used to identify a command in errors and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GetVersion => "_",
            Self::GetFreq => "f",
            Self::SetFreq { .. } => "F",
            Self::GetDemod => "m",
            Self::SetDemod { .. } => "M",
            Self::GetSignalStrength => "l STRENGTH",
            Self::GetSquelch => "l SQL",
            Self::SetSquelch { .. } => "L SQL",
            Self::StartRecording => "AOS",
            Self::StopRecording => "LOS",
            Self::RecordingStatus => "u RECORD",
            Self::Quit => "q",
        }
    }

    /// Serialize to the request line sent on the wire, newline included.
    ///
    /// Arguments are space-joined with no quoting or escaping.
    pub fn wire_line(&self) -> String {
        match self {
            Self::SetFreq { hz } => format!("F {hz}\n"),
            Self::SetDemod { mode } => format!("M {mode}\n"),
            Self::SetSquelch { level } => format!("L SQL {level}\n"),
            other => format!("{}\n", other.code()),
        }
    }

    /// Number of reply lines the peer sends for this command, completion
    /// markers included.
    ///
    /// `Quit` is fire-and-forget; its reply is never read.
    pub fn reply_lines(&self) -> usize {
        match self {
            Self::GetDemod => 2,
            Self::Quit => 0,
            _ => 1,
        }
    }
}
