//! Architecture detection.

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

impl From<&str> for Arch {
    fn from(s: &str) -> Self {
        match s {
            "x86" | "i386" | "i686" => Arch::X86,
            "x86_64" | "amd64" => Arch::X86_64,
            "arm" | "armv7l" => Arch::ARM,
            "aarch64" | "arm64" => Arch::ARM64,
            _ => Arch::Unknown,
        }
    }
}

impl Arch {
    /// Architecture name as understood by the command archive
    /// (`amd64`, `arm64`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "386",
            Arch::X86_64 => "amd64",
            Arch::ARM => "arm",
            Arch::ARM64 => "arm64",
            Arch::Unknown => "unknown",
        }
    }
}

/// Architecture this launcher was built for.
pub fn detect() -> Arch {
    Arch::from(std::env::consts::ARCH)
}
