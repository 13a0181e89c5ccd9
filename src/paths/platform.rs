//! Platform selection and the strategy seam.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::os::env::Env;
use crate::paths::ResolvedPaths;
use crate::paths::{macos::MacOs, windows::Windows, xdg::Xdg};

/// Computes [`ResolvedPaths`] from an environment snapshot.
pub trait Strategy {
    /// Resolve all four directory categories from `env`.
    fn resolve(&self, env: &Env) -> ResolvedPaths;
}

/// Family of directory conventions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// XDG Base Directory conventions, used on every Unix-like system except macOS.
    Xdg,
    /// `~/Library/...` conventions.
    MacOs,
    /// `%APPDATA%` and friends.
    Windows,
}

/// Error returned when parsing an unknown [`Platform`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform `{0}`, expected one of `xdg`, `macos`, `windows`")]
pub struct ParsePlatformError(String);

impl Platform {
    /// Platform matching the build target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Xdg
        }
    }

    /// Path separator used when appending segments.
    pub const fn separator(self) -> char {
        match self {
            Self::Xdg | Self::MacOs => '/',
            Self::Windows => '\\',
        }
    }

    /// Strategy implementing this platform's conventions.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Self::Xdg => &Xdg,
            Self::MacOs => &MacOs,
            Self::Windows => &Windows,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Xdg => "xdg",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xdg" | "unix" | "linux" => Ok(Self::Xdg),
            "macos" | "darwin" => Ok(Self::MacOs),
            "windows" => Ok(Self::Windows),
            _ => Err(ParsePlatformError(s.to_owned())),
        }
    }
}
