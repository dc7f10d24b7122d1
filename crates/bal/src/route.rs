//! Invocation classification. Pure: looks at the raw arguments only.

use std::ffi::{OsStr, OsString};

/// First tokens answered by the command archive after the distribution.
pub const HELP_AND_VERSION: &[&str] = &["help", "-h", "--help", "version", "-v", "--version"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `completion <shell> ...`
    Completion { shell: OsString },
    /// `dist ...` or `update ...`, handled by the command archive alone.
    Admin { update: bool },
    /// `build ...`: archive prelude, then the distribution.
    Build,
    /// Anything else, including no arguments.
    Run,
}

impl Route {
    /// `args` excludes the program name.
    pub fn classify(args: &[OsString]) -> Self {
        if let [first, shell, ..] = args
            && first == "completion"
        {
            return Route::Completion {
                shell: shell.clone(),
            };
        }

        match args.first().and_then(|a| a.to_str()) {
            Some("dist") => Route::Admin { update: false },
            Some("update") => Route::Admin { update: true },
            Some("build") => Route::Build,
            _ => Route::Run,
        }
    }
}

pub fn is_help_or_version(arg: &OsStr) -> bool {
    arg.to_str().is_some_and(|a| HELP_AND_VERSION.contains(&a))
}

/// Whether a successful distribution run is followed by the command
/// archive: with no arguments, or for help/version requests.
pub fn wants_archive_follow_up(args: &[OsString]) -> bool {
    args.first().is_none_or(|a| is_help_or_version(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_completion_needs_shell_argument() {
        assert_eq!(
            Route::classify(&argv(&["completion", "zsh"])),
            Route::Completion { shell: "zsh".into() }
        );
        assert_eq!(
            Route::classify(&argv(&["completion", "fish", "extra"])),
            Route::Completion { shell: "fish".into() }
        );
        assert_eq!(Route::classify(&argv(&["completion"])), Route::Run);
    }

    #[test]
    fn test_admin_commands() {
        assert_eq!(
            Route::classify(&argv(&["dist", "list"])),
            Route::Admin { update: false }
        );
        assert_eq!(
            Route::classify(&argv(&["dist", "update"])),
            Route::Admin { update: false }
        );
        assert_eq!(
            Route::classify(&argv(&["update"])),
            Route::Admin { update: true }
        );
    }

    #[test]
    fn test_build_and_run() {
        assert_eq!(Route::classify(&argv(&["build", "-o", "x"])), Route::Build);
        assert_eq!(Route::classify(&argv(&["run", "main.bal"])), Route::Run);
        assert_eq!(Route::classify(&argv(&["--help"])), Route::Run);
        assert_eq!(Route::classify(&[]), Route::Run);
    }

    #[test]
    fn test_admin_token_only_counts_first() {
        assert_eq!(Route::classify(&argv(&["run", "dist"])), Route::Run);
        assert_eq!(Route::classify(&argv(&["new", "build"])), Route::Run);
    }

    #[test]
    fn test_archive_follow_up() {
        assert!(wants_archive_follow_up(&[]));
        for flag in HELP_AND_VERSION {
            assert!(wants_archive_follow_up(&argv(&[*flag, "build"])));
        }
        assert!(!wants_archive_follow_up(&argv(&["run"])));
        assert!(!wants_archive_follow_up(&argv(&["--helpful"])));
    }
}
