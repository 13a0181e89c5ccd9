//! Resolved configuration, cache, and state directories.
//!
//! [`ResolvedPaths`] is an immutable value holding the four directory categories for one
//! platform. Build it from the process environment with [`ResolvedPaths::new`], or from an
//! explicit [`Env`] snapshot with [`ResolvedPaths::resolve`].
//!
//! ```rust
//! use configdir::os::env::Env;
//! use configdir::paths::{Platform, ResolvedPaths};
//! use std::path::PathBuf;
//!
//! let env = Env::from_iter([("HOME", "/home/user"), ("XDG_CACHE_HOME", "/tmp/cache")]);
//! let paths = ResolvedPaths::resolve(Platform::Xdg, &env);
//!
//! assert_eq!(
//!     paths.local_cache_path(&["vendor-name", "app-name"]),
//!     PathBuf::from("/tmp/cache/vendor-name/app-name"),
//! );
//! assert_eq!(paths.local_config_path(&[]), PathBuf::from("/home/user/.config"));
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::os::env::Env;

pub mod macos;
pub mod platform;
pub mod windows;
pub mod xdg;

pub use platform::{ParsePlatformError, Platform, Strategy};

/// Directories resolved for a single platform.
///
/// Values are never mutated: [`refresh`](ResolvedPaths::refresh) returns a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPaths {
    platform: Platform,
    system_config: Vec<PathBuf>,
    local_config: PathBuf,
    local_cache: PathBuf,
    local_state: PathBuf,
}

impl ResolvedPaths {
    /// Resolve paths for [`Platform::current`] from the environment of the current process.
    pub fn new() -> Self {
        Self::resolve(Platform::current(), &Env::new())
    }

    /// Resolve paths for `platform` from `env`.
    pub fn resolve(platform: Platform, env: &Env) -> Self {
        let paths = platform.strategy().resolve(env);
        log::debug!("resolved {platform} paths: {paths:?}");
        paths
    }

    /// Assemble resolved paths from already computed parts.
    ///
    /// Used by [`Strategy`] implementations.
    pub fn from_parts(
        platform: Platform,
        system_config: Vec<PathBuf>,
        local_config: PathBuf,
        local_cache: PathBuf,
        local_state: PathBuf,
    ) -> Self {
        Self {
            platform,
            system_config,
            local_config,
            local_cache,
            local_state,
        }
    }

    /// Re-read the environment of the current process, keeping the same platform.
    pub fn refresh(&self) -> Self {
        self.refresh_from(&Env::new())
    }

    /// Re-resolve from `env`, keeping the same platform.
    pub fn refresh_from(&self, env: &Env) -> Self {
        Self::resolve(self.platform, env)
    }

    /// Platform these paths were resolved for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// System-wide configuration directories, each with `segments` appended.
    ///
    /// Order follows the configured directory list. With no segments, returns the directories
    /// unchanged.
    pub fn system_config_paths(&self, segments: &[&str]) -> Vec<PathBuf> {
        self.system_config
            .iter()
            .map(|dir| self.join(dir, segments))
            .collect()
    }

    /// Per-user configuration directory with `segments` appended.
    pub fn local_config_path(&self, segments: &[&str]) -> PathBuf {
        self.join(&self.local_config, segments)
    }

    /// Per-user cache directory with `segments` appended.
    pub fn local_cache_path(&self, segments: &[&str]) -> PathBuf {
        self.join(&self.local_cache, segments)
    }

    /// Per-user state directory with `segments` appended.
    ///
    /// Only XDG has a dedicated state directory; macOS aliases it to the configuration
    /// directory and Windows to the cache directory.
    pub fn local_state_path(&self, segments: &[&str]) -> PathBuf {
        self.join(&self.local_state, segments)
    }

    fn join(&self, base: &Path, segments: &[&str]) -> PathBuf {
        join_segments(base, self.platform.separator(), segments)
    }
}

impl Default for ResolvedPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Append each of `segments` to `base`, preceded by `separator`.
///
/// Unlike [`Path::join`], this never replaces `base` with an absolute segment and keeps an
/// empty `base` as an empty prefix, so `""` joined with `.config` is `/.config`.
pub(crate) fn join_segments(
    base: impl AsRef<Path>,
    separator: char,
    segments: &[&str],
) -> PathBuf {
    let mut separator_buf = [0; 4];
    let separator: &str = separator.encode_utf8(&mut separator_buf);

    let mut joined = OsString::from(base.as_ref().as_os_str());
    for segment in segments {
        joined.push(separator);
        joined.push(segment);
    }
    PathBuf::from(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xdg_paths() -> ResolvedPaths {
        ResolvedPaths::resolve(Platform::Xdg, &Env::from_iter([("HOME", "/home/user")]))
    }

    #[test]
    fn join_zero_one_two_segments() {
        assert_eq!(join_segments("/etc/xdg", '/', &[]), PathBuf::from("/etc/xdg"));
        assert_eq!(
            join_segments("/etc/xdg", '/', &["vendor-name"]),
            PathBuf::from("/etc/xdg/vendor-name")
        );
        assert_eq!(
            join_segments("/etc/xdg", '/', &["vendor-name", "app-name"]),
            PathBuf::from("/etc/xdg/vendor-name/app-name")
        );
    }

    #[test]
    fn join_keeps_empty_base() {
        assert_eq!(join_segments("", '/', &[".config"]).as_os_str(), "/.config");
        assert_eq!(join_segments("", '\\', &["vendor"]).as_os_str(), "\\vendor");
    }

    #[test]
    fn join_does_not_normalize() {
        let joined = join_segments("/tmp/cache/", '/', &["/abs", "x/"]);
        assert_eq!(joined.as_os_str(), "/tmp/cache///abs/x/");
    }

    #[test]
    fn segments_apply_to_every_category() {
        let paths = xdg_paths();
        let segments = ["vendor-name", "app-name"];
        assert_eq!(
            paths.system_config_paths(&segments),
            vec![PathBuf::from("/etc/xdg/vendor-name/app-name")]
        );
        assert_eq!(
            paths.local_config_path(&segments),
            PathBuf::from("/home/user/.config/vendor-name/app-name")
        );
        assert_eq!(
            paths.local_cache_path(&segments),
            PathBuf::from("/home/user/.cache/vendor-name/app-name")
        );
        assert_eq!(
            paths.local_state_path(&segments),
            PathBuf::from("/home/user/.local/state/vendor-name/app-name")
        );
    }

    #[test]
    fn refresh_is_idempotent() {
        let env = Env::from_iter([
            ("HOME", "/home/user"),
            ("XDG_CONFIG_DIRS", "/etc/xdg:/opt/global/conf"),
        ]);
        let first = ResolvedPaths::resolve(Platform::Xdg, &env);
        let second = first.refresh_from(&env);
        assert_eq!(first, second);
        assert_eq!(second.refresh_from(&env), second);
    }

    #[test]
    fn refresh_picks_up_changes_and_keeps_platform() {
        let before = ResolvedPaths::resolve(Platform::MacOs, &Env::from_iter([("HOME", "/a")]));
        let after = before.refresh_from(&Env::from_iter([("HOME", "/b")]));

        assert_eq!(after.platform(), Platform::MacOs);
        assert_eq!(before.local_cache_path(&[]), PathBuf::from("/a/Library/Caches"));
        assert_eq!(after.local_cache_path(&[]), PathBuf::from("/b/Library/Caches"));
    }

    #[test]
    fn windows_paths_join_with_backslash() {
        let env = Env::from_iter([("APPDATA", "C:\\Users\\user\\AppData\\Roaming")]);
        let paths = ResolvedPaths::resolve(Platform::Windows, &env);
        assert_eq!(
            paths.local_config_path(&["vendor-name", "app-name"]),
            PathBuf::from("C:\\Users\\user\\AppData\\Roaming\\vendor-name\\app-name")
        );
    }

    #[test]
    fn new_uses_current_platform() {
        assert_eq!(ResolvedPaths::new().platform(), Platform::current());
    }
}
