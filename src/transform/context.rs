//! Translation Context
//!
//! Mutable scratchpad threaded through one `transpile()` call. Translators
//! append warnings, record untranslatable fragments, and flag fallback use.

use crate::tools::ToolAvailability;

/// Target PowerShell version. Reserved for future emitter differences; the
/// current emitter targets the 5.1 baseline with forward-compatible syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PsVersion {
    #[default]
    V5,
    V7,
}

pub struct TransformContext {
    pub tools: ToolAvailability,
    pub prefer_native: bool,
    pub ps_version: PsVersion,
    pub warnings: Vec<String>,
    pub unsupported: Vec<String>,
    pub used_fallbacks: bool,
}

impl TransformContext {
    pub fn new(tools: ToolAvailability, prefer_native: bool, ps_version: PsVersion) -> Self {
        Self {
            tools,
            prefer_native,
            ps_version,
            warnings: Vec::new(),
            unsupported: Vec::new(),
            used_fallbacks: false,
        }
    }

    /// Append a warning. One translator decision yields exactly one warning;
    /// repeats of the same message are dropped.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.warnings.contains(&message) {
            self.warnings.push(message);
        }
    }

    /// Record an input fragment that could not be translated at all
    pub fn unsupported(&mut self, fragment: impl Into<String>) {
        self.unsupported.push(fragment.into());
    }

    /// Mark that a non-native fallback translation was emitted
    pub fn mark_fallback(&mut self) {
        self.used_fallbacks = true;
    }

    /// Should the native path for this tool be taken?
    pub fn use_native(&self, available: bool) -> bool {
        self.prefer_native && available
    }
}
