//! Process delegation.
//!
//! A [`Delegate`] runs one [`DispatchPlan`] and reports the child's exit
//! code. A child that ran and failed is not an error: its code is returned
//! as-is. Only a launch that never started is an `Err`.

use crate::error::{Error, Result};
use crate::plan::DispatchPlan;
use bal_platform::command::Command;
use std::process::ExitStatus;
use tracing::{debug, error, instrument};

pub trait Delegate {
    fn execute(&mut self, plan: &DispatchPlan) -> Result<i32>;
}

/// Spawns the plan's program with inherited standard streams and waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDelegate;

impl Delegate for ProcessDelegate {
    #[instrument(skip_all, fields(program = %plan.program().display()))]
    fn execute(&mut self, plan: &DispatchPlan) -> Result<i32> {
        debug!(args = ?plan.get_args(), "launching");
        let status = Command::new(plan.program())
            .args(plan.get_args())
            .envs(plan.envs())
            .status()
            .map_err(|source| {
                error!(err = %source, "failed to launch");
                Error::Launch {
                    program: plan.program().to_path_buf(),
                    source,
                }
            })?;

        let code = exit_code(status);
        debug!(code, "child exited");
        Ok(code)
    }
}

/// Exit code to mirror for `status`; termination without a code maps to 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
