//! macOS `Library` conventions.
//!
//! No environmental variable overrides these; only `$HOME` is read. State shares the
//! configuration directory.

use std::path::PathBuf;

use crate::os::env::Env;
use crate::paths::{join_segments, Platform, ResolvedPaths, Strategy};

const SYSTEM_CONFIG: &str = "/Library/Application Support";

/// macOS strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOs;

impl Strategy for MacOs {
    fn resolve(&self, env: &Env) -> ResolvedPaths {
        let home = env.get_or_empty("HOME");
        let separator = Platform::MacOs.separator();
        let application_support = join_segments(&home, separator, &["Library", "Application Support"]);

        ResolvedPaths::from_parts(
            Platform::MacOs,
            vec![PathBuf::from(SYSTEM_CONFIG)],
            application_support.clone(),
            join_segments(&home, separator, &["Library", "Caches"]),
            application_support,
        )
    }
}
