//! Windows known-folder variables.
//!
//! Values are taken as-is with no fallback: an unset variable leaves an empty base, so
//! appended segments start with a bare `\`. State shares the cache directory.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::os::env::Env;
use crate::paths::{Platform, ResolvedPaths, Strategy};

/// Windows strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

impl Strategy for Windows {
    fn resolve(&self, env: &Env) -> ResolvedPaths {
        let local_app_data = PathBuf::from(var(env, "LOCALAPPDATA"));

        ResolvedPaths::from_parts(
            Platform::Windows,
            vec![PathBuf::from(var(env, "PROGRAMDATA"))],
            PathBuf::from(var(env, "APPDATA")),
            local_app_data.clone(),
            local_app_data,
        )
    }
}

fn var(env: &Env, key: &str) -> OsString {
    if env.get_non_empty(key).is_none() {
        log::trace!("{key} is unset, leaving an empty base directory");
    }
    env.get_or_empty(key)
}
