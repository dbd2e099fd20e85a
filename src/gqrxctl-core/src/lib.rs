// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod config;
pub mod connection;
pub mod error;
pub mod freq;
pub mod receiver;

pub use config::ConnectionConfig;
pub use connection::Connection;
pub use error::{ControlError, ControlResult};
pub use freq::Freq;
pub use receiver::Receiver;
