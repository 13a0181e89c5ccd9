//! XDG Base Directory Specification support.
//!
//! Each directory comes from its `XDG_*` variable when that is set to a non-empty value, and
//! otherwise from a fallback rooted at `$HOME`:
//!
//! | Category      | Variable          | Fallback             |
//! |---------------|-------------------|----------------------|
//! | system config | `XDG_CONFIG_DIRS` | `/etc/xdg`           |
//! | local config  | `XDG_CONFIG_HOME` | `$HOME/.config`      |
//! | local cache   | `XDG_CACHE_HOME`  | `$HOME/.cache`       |
//! | local state   | `XDG_STATE_HOME`  | `$HOME/.local/state` |

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::os::env::Env;
use crate::paths::{join_segments, Platform, ResolvedPaths, Strategy};

const SYSTEM_CONFIG_FALLBACK: &str = "/etc/xdg";

/// XDG strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xdg;

impl Strategy for Xdg {
    fn resolve(&self, env: &Env) -> ResolvedPaths {
        ResolvedPaths::from_parts(
            Platform::Xdg,
            system_config(env),
            home_or_fallback(env, "XDG_CONFIG_HOME", &[".config"]),
            home_or_fallback(env, "XDG_CACHE_HOME", &[".cache"]),
            home_or_fallback(env, "XDG_STATE_HOME", &[".local", "state"]),
        )
    }
}

fn system_config(env: &Env) -> Vec<PathBuf> {
    match env.get_non_empty("XDG_CONFIG_DIRS") {
        Some(dirs) => split_dirs(dirs).into_iter().map(PathBuf::from).collect(),
        None => {
            log::trace!("XDG_CONFIG_DIRS is unset, using {SYSTEM_CONFIG_FALLBACK}");
            vec![PathBuf::from(SYSTEM_CONFIG_FALLBACK)]
        }
    }
}

fn home_or_fallback(env: &Env, key: &str, fallback: &[&str]) -> PathBuf {
    match env.get_non_empty(key) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let dir = join_segments(env.get_or_empty("HOME"), Platform::Xdg.separator(), fallback);
            log::trace!("{key} is unset, using {}", dir.display());
            dir
        }
    }
}

/// Split a `:`-delimited directory list, keeping empty entries and order.
fn split_dirs(dirs: &OsStr) -> Vec<OsString> {
    dirs.as_encoded_bytes()
        .split(|&byte| byte == b':')
        // SAFETY: every piece comes from `as_encoded_bytes` and is split on an ASCII byte,
        // which is a valid boundary for the encoding.
        .map(|piece| unsafe { OsStr::from_encoded_bytes_unchecked(piece) }.to_os_string())
        .collect()
}
