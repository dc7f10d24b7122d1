//! `bal`, the front-end launcher of a Ballerina installation.
//!
//! The launcher owns no language semantics. It classifies the invocation,
//! resolves the Java runtime, the command archive and the effective
//! distribution from the on-disk [`layout`], and delegates to them through
//! [`bal_shim`]. The child's exit code becomes the launcher's.
//!
//! - [`route`] classifies the raw arguments.
//! - [`launcher`] turns a route into launches.
//! - [`version`] and [`runtime`] resolve what to launch.
//! - [`completion`] and [`update`] cover the two routes handled in-process.

pub mod completion;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod launcher;
pub mod layout;
pub mod logging;
pub mod route;
pub mod runtime;
pub mod update;
pub mod version;

pub use error::{LauncherError, Result};
