//! Target platform model: the (os, compiler, arch) triple a build is configured for.

use core::fmt;
use core::str::FromStr;

use crate::error::TdError;

/// Operating system of the build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Os {
    Windows,
    Linux,
    Macos,
    Ios,
    Android,
    FreeBsd,
}

/// Compiler family; some system library names are spelled differently per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompilerFamily {
    Msvc,
    Gcc,
    Clang,
    AppleClang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arch {
    X86,
    X86_64,
    Armv7,
    Armv8,
}

/// The platform a build configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPlatform {
    pub os: Os,
    pub compiler: CompilerFamily,
    pub arch: Arch,
}

impl TargetPlatform {
    pub fn new(os: Os, compiler: CompilerFamily, arch: Arch) -> Self {
        Self { os, compiler, arch }
    }

    /// Best guess for the platform this process runs on.
    pub fn host() -> Self {
        let os = Os::from_str(std::env::consts::OS).unwrap_or(Os::Linux);
        let arch = Arch::from_str(std::env::consts::ARCH).unwrap_or(Arch::X86_64);
        Self {
            os,
            compiler: CompilerFamily::default_for(os),
            arch,
        }
    }

    pub fn is_msvc(&self) -> bool {
        self.compiler == CompilerFamily::Msvc
    }
}

impl CompilerFamily {
    /// The compiler family a platform uses when none is given explicitly.
    pub fn default_for(os: Os) -> Self {
        match os {
            Os::Windows => CompilerFamily::Msvc,
            Os::Macos | Os::Ios => CompilerFamily::AppleClang,
            Os::Android | Os::FreeBsd => CompilerFamily::Clang,
            Os::Linux => CompilerFamily::Gcc,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Os::Windows => "Windows",
            Os::Linux => "Linux",
            Os::Macos => "Macos",
            Os::Ios => "iOS",
            Os::Android => "Android",
            Os::FreeBsd => "FreeBSD",
        };
        f.write_str(s)
    }
}

impl FromStr for Os {
    type Err = TdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Os::Windows),
            "linux" => Ok(Os::Linux),
            "macos" | "darwin" => Ok(Os::Macos),
            "ios" => Ok(Os::Ios),
            "android" => Ok(Os::Android),
            "freebsd" => Ok(Os::FreeBsd),
            _ => Err(TdError::UnknownValue {
                kind: "os",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompilerFamily::Msvc => "msvc",
            CompilerFamily::Gcc => "gcc",
            CompilerFamily::Clang => "clang",
            CompilerFamily::AppleClang => "apple-clang",
        };
        f.write_str(s)
    }
}

impl FromStr for CompilerFamily {
    type Err = TdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msvc" | "visual studio" => Ok(CompilerFamily::Msvc),
            "gcc" | "mingw" => Ok(CompilerFamily::Gcc),
            "clang" => Ok(CompilerFamily::Clang),
            "apple-clang" | "apple_clang" => Ok(CompilerFamily::AppleClang),
            _ => Err(TdError::UnknownValue {
                kind: "compiler",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
            Arch::Armv7 => "armv7",
            Arch::Armv8 => "armv8",
        };
        f.write_str(s)
    }
}

impl FromStr for Arch {
    type Err = TdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "i686" => Ok(Arch::X86),
            "x86_64" | "amd64" => Ok(Arch::X86_64),
            "armv7" | "arm" => Ok(Arch::Armv7),
            "armv8" | "aarch64" | "arm64" => Ok(Arch::Armv8),
            _ => Err(TdError::UnknownValue {
                kind: "arch",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.os, self.compiler, self.arch)
    }
}
