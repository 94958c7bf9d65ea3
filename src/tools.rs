//! Native Tool Availability
//!
//! The translator registry prefers native executables (`rg`, `fd`,
//! `curl.exe`, `jq`) over PowerShell cmdlet fallbacks when they are on PATH.
//! The probe consults the filesystem once and caches the result
//! process-wide; hosts whose PATH can change (and tests) reset it with
//! [`reset_tool_cache`].

use std::sync::Mutex;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Which native substitutes are available on this host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAvailability {
    pub rg: bool,
    pub fd: bool,
    pub curl: bool,
    pub jq: bool,
}

impl ToolAvailability {
    /// Everything available; useful in tests
    pub fn all() -> Self {
        Self {
            rg: true,
            fd: true,
            curl: true,
            jq: true,
        }
    }

    /// Nothing available; forces every fallback path
    pub fn none() -> Self {
        Self::default()
    }
}

lazy_static! {
    static ref TOOL_CACHE: Mutex<Option<ToolAvailability>> = Mutex::new(None);
}

/// Probe PATH for native tools. The first call does the lookups; later
/// calls return the cached record.
pub fn detect_tools() -> ToolAvailability {
    let mut cache = TOOL_CACHE.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(tools) = *cache {
        return tools;
    }
    let tools = probe();
    *cache = Some(tools);
    tools
}

/// Clear the cached probe result
pub fn reset_tool_cache() {
    let mut cache = TOOL_CACHE.lock().unwrap_or_else(|e| e.into_inner());
    *cache = None;
}

fn probe() -> ToolAvailability {
    ToolAvailability {
        rg: which::which("rg").is_ok(),
        fd: which::which("fd").is_ok(),
        curl: which::which("curl").is_ok(),
        jq: which::which("jq").is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_cached_and_resettable() {
        reset_tool_cache();
        let first = detect_tools();
        let second = detect_tools();
        assert_eq!(first, second);
        reset_tool_cache();
        let third = detect_tools();
        assert_eq!(first, third);
    }
}
