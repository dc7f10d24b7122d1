//! Host platform facts used by the launcher: operating system, CPU
//! architecture, user and installation directories, and the process
//! [`command::Command`] builder.

pub use error::{Error, Result};

pub mod arch;
pub mod command;
pub mod dir;
mod error;
pub mod os;
