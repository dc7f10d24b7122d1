//! Operating system detection.

use once_cell::sync::Lazy;

/// Operating system types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    Linux,
    Unknown,
}

static CURRENT: Lazy<OS> = Lazy::new(|| OS::from(std::env::consts::OS));

impl From<&str> for OS {
    fn from(name: &str) -> Self {
        match name {
            "windows" => OS::Windows,
            "macos" | "darwin" => OS::Macos,
            "linux" => OS::Linux,
            _ => OS::Unknown,
        }
    }
}

impl OS {
    /// Whether the launcher directory must be symlink-resolved before
    /// relative addressing. The macOS installer already links a resolved path.
    pub fn resolves_symlinks(self) -> bool {
        !matches!(self, OS::Macos)
    }

    /// Whether launches carry the host architecture in their environment.
    pub fn exports_architecture(self) -> bool {
        matches!(self, OS::Macos)
    }
}

/// Detect current operating system.
pub fn detect() -> OS {
    *CURRENT
}
