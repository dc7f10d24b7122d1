//! Dispatch router.
//!
//! Turns the raw argument vector into one or more [`DispatchPlan`]s and
//! hands them to a [`Delegate`] in order. Launches are strictly
//! sequential; the first non-zero child code ends the invocation.

use crate::completion;
use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::exit_codes::OK;
use crate::layout::Layout;
use crate::route::{Route, wants_archive_follow_up};
use crate::runtime::locate_runtime;
use crate::update;
use crate::version::resolve_distribution_version;
use bal_platform::arch::{self, Arch};
use bal_platform::dir;
use bal_platform::os::{self, OS};
use bal_shim::{Delegate, DispatchPlan};
use once_cell::unsync::OnceCell;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub const BALLERINA_HOME: &str = "BALLERINA_HOME";
pub const MAC_ARCHITECTURE: &str = "BALLERINA_MAC_ARCHITECTURE";
/// Selects the command archive file name.
pub const TOOL_VERSION_ENV: &str = "VERSION";

/// Values resolved once at startup and threaded through every launch.
#[derive(Debug, Clone)]
pub struct Context {
    pub layout: Layout,
    pub tool_version: String,
    pub home: Option<PathBuf>,
    pub os: OS,
    pub arch: Arch,
    launch: OnceCell<LaunchSettings>,
}

/// What only launching routes need. Resolved on first use, so `completion`
/// never reads `launcher.toml`.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub config: LauncherConfig,
    pub runtime: PathBuf,
    pub command_archive: PathBuf,
}

impl Context {
    pub fn from_env() -> Result<Self> {
        let os = os::detect();
        let layout = Layout::new(dir::current_installation_root(os)?);
        let tool_version = std::env::var(TOOL_VERSION_ENV).unwrap_or_default();
        Ok(Self::new(layout, tool_version, dir::user_home(), os, arch::detect()))
    }

    pub fn new(
        layout: Layout,
        tool_version: impl Into<String>,
        home: Option<PathBuf>,
        os: OS,
        arch: Arch,
    ) -> Self {
        Self {
            layout,
            tool_version: tool_version.into(),
            home,
            os,
            arch,
            launch: OnceCell::new(),
        }
    }

    /// Use `config` instead of loading it from the installation.
    pub fn with_config(self, config: LauncherConfig) -> Self {
        let settings = self.settings_for(config);
        let _ = self.launch.set(settings);
        self
    }

    pub fn launch_settings(&self) -> Result<&LaunchSettings> {
        self.launch.get_or_try_init(|| {
            let config = LauncherConfig::load(&self.layout)?;
            Ok::<_, LauncherError>(self.settings_for(config))
        })
    }

    fn settings_for(&self, config: LauncherConfig) -> LaunchSettings {
        let runtime = locate_runtime(&self.layout, &config);
        let command_archive = self.layout.command_archive(&self.tool_version);
        debug!(
            root = %self.layout.root().display(),
            runtime = %runtime.display(),
            archive = %command_archive.display(),
            "resolved launch settings"
        );
        LaunchSettings {
            config,
            runtime,
            command_archive,
        }
    }
}

pub struct Launcher<D> {
    ctx: Context,
    delegate: D,
}

impl<D: Delegate> Launcher<D> {
    pub fn new(ctx: Context, delegate: D) -> Self {
        Self { ctx, delegate }
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Dispatch one invocation. `args` excludes the program name. Returns
    /// the exit code for this process; `Err` always means exit 1.
    pub fn dispatch(&mut self, args: &[OsString], out: &mut dyn Write) -> Result<i32> {
        let route = Route::classify(args);
        debug!(?route, "classified invocation");

        match route {
            Route::Completion { shell } => {
                completion::emit(&self.ctx.layout, &shell, out)?;
                Ok(OK)
            }
            Route::Admin { update } => {
                let plan = self.admin_plan(args)?;
                let code = self.delegate.execute(&plan)?;
                if code != OK || !update {
                    return Ok(code);
                }
                update::finish(&self.ctx.layout, &mut self.delegate, out)
            }
            Route::Build => {
                debug!("forwarding only `build` to the command archive");
                let plan = self.archive_plan(["build"])?;
                let code = self.delegate.execute(&plan)?;
                if code != OK {
                    return Ok(code);
                }
                self.run_distribution(args)
            }
            Route::Run => self.run_distribution(args),
        }
    }

    fn run_distribution(&mut self, args: &[OsString]) -> Result<i32> {
        let plan = self.distribution_plan(args)?;
        let code = self.delegate.execute(&plan)?;
        if code != OK || !wants_archive_follow_up(args) {
            return Ok(code);
        }
        let follow_up = self.archive_plan(args)?;
        Ok(self.delegate.execute(&follow_up)?)
    }

    /// `<runtime> -jar <archive> <args...>`.
    pub fn archive_plan<I, S>(&self, args: I) -> Result<DispatchPlan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let settings = self.ctx.launch_settings()?;
        Ok(DispatchPlan::new(&settings.runtime)
            .arg("-jar")
            .arg(&settings.command_archive)
            .args(args))
    }

    pub fn admin_plan(&self, args: &[OsString]) -> Result<DispatchPlan> {
        let plan = self.archive_plan(args)?;
        if self.ctx.os.exports_architecture() {
            Ok(plan.env(MAC_ARCHITECTURE, self.ctx.arch.as_str()))
        } else {
            Ok(plan)
        }
    }

    /// Entry point of the effective distribution with `BALLERINA_HOME` set.
    pub fn distribution_plan(&self, args: &[OsString]) -> Result<DispatchPlan> {
        let settings = self.ctx.launch_settings()?;
        let version = resolve_distribution_version(&self.ctx.layout, self.ctx.home.as_deref())?;
        let home = self.ctx.layout.distribution_home(&version);
        let bin = home.join("bin");

        let program = settings
            .config
            .distribution_executables
            .iter()
            .map(|name| bin.join(name))
            .find(|path| path.exists())
            .ok_or(LauncherError::MissingDistribution)?;
        debug!(%version, program = %program.display(), "selected distribution");

        Ok(DispatchPlan::new(program).args(args).env(BALLERINA_HOME, &home))
    }
}
