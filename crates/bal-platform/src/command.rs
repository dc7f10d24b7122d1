use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Process builder whose launches inherit the parent's standard streams.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        let program = program.as_ref();
        Self {
            inner: StdCommand::new(program),
            program: program.to_string_lossy().into_owned(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.envs(vars);
        self
    }

    /// Run to completion with inherited stdin, stdout and stderr.
    pub fn status(mut self) -> Result<ExitStatus> {
        self.inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandFailed {
                cmd: self.program,
                source,
            })
    }
}
