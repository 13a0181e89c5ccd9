//! Process-wide resolved paths.
//!
//! Resolved from the process environment on first use. Call [`refresh`] after changing the
//! environment to pick the new values up.

use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::os::env::Env;
use crate::paths::ResolvedPaths;

static PATHS: LazyLock<RwLock<ResolvedPaths>> = LazyLock::new(|| RwLock::new(ResolvedPaths::new()));

fn with_paths<T>(f: impl FnOnce(&ResolvedPaths) -> T) -> T {
    let paths = PATHS.read().unwrap_or_else(PoisonError::into_inner);
    f(&paths)
}

fn replace(paths: ResolvedPaths) {
    *PATHS.write().unwrap_or_else(PoisonError::into_inner) = paths;
}

/// Re-read the process environment and replace the process-wide paths.
pub fn refresh() {
    refresh_from(&Env::new());
}

/// Replace the process-wide paths with ones resolved from `env`, keeping the platform.
pub fn refresh_from(env: &Env) {
    let paths = with_paths(|current| current.refresh_from(env));
    log::debug!("refreshed process-wide {} paths", paths.platform());
    replace(paths);
}

/// Clone of the process-wide paths.
pub fn current() -> ResolvedPaths {
    with_paths(ResolvedPaths::clone)
}

/// See [`ResolvedPaths::system_config_paths`].
pub fn system_config_paths(segments: &[&str]) -> Vec<PathBuf> {
    with_paths(|paths| paths.system_config_paths(segments))
}

/// See [`ResolvedPaths::local_config_path`].
pub fn local_config_path(segments: &[&str]) -> PathBuf {
    with_paths(|paths| paths.local_config_path(segments))
}

/// See [`ResolvedPaths::local_cache_path`].
pub fn local_cache_path(segments: &[&str]) -> PathBuf {
    with_paths(|paths| paths.local_cache_path(segments))
}

/// See [`ResolvedPaths::local_state_path`].
pub fn local_state_path(segments: &[&str]) -> PathBuf {
    with_paths(|paths| paths.local_state_path(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Platform;

    // Every test touching the process-wide state lives here, so nothing races it.
    #[test]
    fn facade_follows_refresh() {
        let platform = current().platform();
        assert_eq!(platform, Platform::current());

        let env = Env::from_iter([
            ("HOME", "/home/user"),
            ("XDG_CONFIG_DIRS", "/etc/xdg:/opt/global/conf"),
            ("XDG_CACHE_HOME", "/tmp/cache"),
            ("APPDATA", "C:\\Users\\user\\AppData\\Roaming"),
        ]);
        refresh_from(&env);
        let expected = ResolvedPaths::resolve(platform, &env);

        assert_eq!(current(), expected);
        assert_eq!(
            system_config_paths(&["vendor-name"]),
            expected.system_config_paths(&["vendor-name"])
        );
        assert_eq!(local_config_path(&["a", "b"]), expected.local_config_path(&["a", "b"]));
        assert_eq!(local_cache_path(&["a"]), expected.local_cache_path(&["a"]));
        assert_eq!(local_state_path(&[]), expected.local_state_path(&[]));

        if platform == Platform::Xdg {
            assert_eq!(
                system_config_paths(&[]),
                vec![PathBuf::from("/etc/xdg"), PathBuf::from("/opt/global/conf")]
            );
            assert_eq!(
                local_cache_path(&["vendor-name", "app-name"]),
                PathBuf::from("/tmp/cache/vendor-name/app-name")
            );
        }

        refresh_from(&env);
        assert_eq!(current(), expected);

        refresh();
        assert_eq!(current(), ResolvedPaths::new());
    }
}
