//! `bal completion <shell>`: the bundled bash completion script, wrapped
//! for the requested shell and written verbatim to the output.

use crate::error::{LauncherError, Result};
use crate::layout::Layout;
use clap::ValueEnum;
use std::ffi::OsStr;
use std::io::Write;

const BASH_PREAMBLE: &str = "#!/usr/bin/env bash\n\n";
const ZSH_PREAMBLE: &str = concat!(
    "autoload -U +X bashcompinit && bashcompinit\n",
    "autoload -U +X compinit && compinit\n\n",
    "#!/usr/bin/env bash\n\n",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

impl CompletionShell {
    /// Exact, case-sensitive shell name.
    pub fn parse(name: &OsStr) -> Option<Self> {
        let name = name.to_str()?;
        <Self as ValueEnum>::from_str(name, false).ok()
    }

    fn preamble(self) -> &'static str {
        match self {
            CompletionShell::Bash => BASH_PREAMBLE,
            CompletionShell::Zsh => ZSH_PREAMBLE,
        }
    }
}

pub fn render(shell: CompletionShell, script: &[u8]) -> Vec<u8> {
    let preamble = shell.preamble().as_bytes();
    let mut out = Vec::with_capacity(preamble.len() + script.len());
    out.extend_from_slice(preamble);
    out.extend_from_slice(script);
    out
}

/// The script's presence is checked before the shell name.
pub fn emit(layout: &Layout, shell: &OsStr, out: &mut dyn Write) -> Result<()> {
    let path = layout.completion_script();
    if !path.exists() {
        return Err(LauncherError::CompletionScriptMissing);
    }

    let shell = CompletionShell::parse(shell)
        .ok_or_else(|| LauncherError::UnknownCommand(shell.to_string_lossy().into_owned()))?;

    let script = std::fs::read(&path)
        .map_err(|source| LauncherError::CompletionScriptRead { path, source })?;
    out.write_all(&render(shell, &script))?;
    Ok(())
}
