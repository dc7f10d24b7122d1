//! Shim mechanism for the launcher.
//!
//! # Architecture
//!
//! Shim is a mechanism, not policy. It maps a command name to a binary
//! path and runs a [`DispatchPlan`] to completion.
//!
//! The [`TargetResolver`] trait is the contract for resolution policy;
//! [`PairResolver`] chains a primary policy with a fallback. The
//! [`Delegate`] trait is the contract for launching; [`ProcessDelegate`]
//! spawns a real child with inherited I/O.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use bal_shim::{PairResolver, TargetResolver};
//!
//! struct Managed;
//! struct Ambient;
//!
//! impl TargetResolver for Managed {
//!     fn resolve(&self, _command: &str) -> Option<PathBuf> {
//!         None
//!     }
//! }
//!
//! impl TargetResolver for Ambient {
//!     fn resolve(&self, command: &str) -> Option<PathBuf> {
//!         Some(PathBuf::from(command))
//!     }
//! }
//!
//! let resolver = PairResolver::new(Managed, Ambient);
//! assert_eq!(resolver.resolve("java"), Some(PathBuf::from("java")));
//! ```

pub use delegate::{Delegate, ProcessDelegate, exit_code};
pub use error::{Error, Result};
pub use plan::DispatchPlan;
pub use resolver::{PairResolver, TargetResolver};

mod delegate;
mod error;
mod plan;
mod resolver;
