//! Configdir - platform-appropriate configuration, cache, and state directories.
//!
//! Follows XDG conventions on Unix-like systems, `~/Library` on macOS, and the known-folder
//! environmental variables on Windows. Nothing is created or checked on disk.
//!
//! ```rust,no_run
//! let system = configdir::system_config_paths(&["vendor-name", "app-name"]);
//! let config = configdir::local_config_path(&["vendor-name", "app-name"]);
//!
//! // After changing the environment:
//! configdir::refresh();
//! let cache = configdir::local_cache_path(&["vendor-name", "app-name"]);
//! ```
//!
//! For an explicit value instead of process-wide state, see [`ResolvedPaths`].

pub mod global;
pub mod os;
pub mod paths;

pub use global::{
    current, local_cache_path, local_config_path, local_state_path, refresh, refresh_from,
    system_config_paths,
};
pub use paths::{Platform, ResolvedPaths};
