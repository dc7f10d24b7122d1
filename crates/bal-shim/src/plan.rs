use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One resolved launch: executable, argument vector and the extra
/// environment exported to the child only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    program: PathBuf,
    args: Vec<OsString>,
    env: BTreeMap<OsString, OsString>,
}

impl DispatchPlan {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn env(mut self, key: impl AsRef<OsStr>, val: impl AsRef<OsStr>) -> Self {
        self.env
            .insert(key.as_ref().to_os_string(), val.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn get_env(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.env.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn envs(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.env.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_builder() {
        let plan = DispatchPlan::new("/opt/jre/bin/java")
            .arg("-jar")
            .arg("/opt/lib/ballerina-command-1.4.2.jar")
            .args(["dist", "list"])
            .env("BALLERINA_MAC_ARCHITECTURE", "arm64");

        assert_eq!(plan.program(), Path::new("/opt/jre/bin/java"));
        assert_eq!(
            plan.get_args(),
            ["-jar", "/opt/lib/ballerina-command-1.4.2.jar", "dist", "list"]
        );
        assert_eq!(
            plan.get_env("BALLERINA_MAC_ARCHITECTURE"),
            Some(OsStr::new("arm64"))
        );
        assert_eq!(plan.envs().count(), 1);
    }

    #[test]
    fn test_plan_env_last_write_wins() {
        let plan = DispatchPlan::new("ball").env("K", "1").env("K", "2");
        assert_eq!(plan.get_env("K"), Some(OsStr::new("2")));
        assert_eq!(plan.envs().count(), 1);
    }
}
