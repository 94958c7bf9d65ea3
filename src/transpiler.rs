//! Transpiler Entry Points
//!
//! Wires the three stages together: lex → parse → transform. A fresh
//! context is built per call; parse failures become a two-line error
//! comment instead of an error return, so callers always get PowerShell
//! text back.

use serde::Serialize;

use crate::tools::{detect_tools, ToolAvailability};
use crate::transform::{translate_script, PsVersion, TransformContext};

/// Options for one transpilation call
#[derive(Debug, Clone, Default)]
pub struct TranspileOptions {
    /// Overrides the PATH probe when set
    pub available_tools: Option<ToolAvailability>,
    /// Prefer rg/fd/curl.exe/jq over cmdlet fallbacks (default true)
    pub prefer_native_tools: Option<bool>,
    /// Reserved for emitter differences; the current emitter targets 5.1
    pub ps_version: PsVersion,
}

/// Result of [`transpile_with_meta`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileResult {
    pub powershell: String,
    pub used_fallbacks: bool,
    pub warnings: Vec<String>,
    pub unsupported: Vec<String>,
}

/// Translate a bash command string to PowerShell text. Never panics;
/// untranslatable input comes back as an error comment.
pub fn transpile(bash: &str, options: &TranspileOptions) -> String {
    transpile_with_meta(bash, options).powershell
}

/// Translate and report warnings, untranslated fragments, and whether any
/// non-native fallback path was taken.
pub fn transpile_with_meta(bash: &str, options: &TranspileOptions) -> TranspileResult {
    if bash.trim().is_empty() {
        return TranspileResult {
            powershell: String::new(),
            used_fallbacks: false,
            warnings: Vec::new(),
            unsupported: Vec::new(),
        };
    }

    let tools = options.available_tools.unwrap_or_else(detect_tools);
    let prefer_native = options.prefer_native_tools.unwrap_or(true);
    let mut ctx = TransformContext::new(tools, prefer_native, options.ps_version);

    match crate::parser::parse(bash) {
        Ok(script) => {
            let powershell = translate_script(&script, &mut ctx);
            TranspileResult {
                powershell,
                used_fallbacks: ctx.used_fallbacks,
                warnings: ctx.warnings,
                unsupported: ctx.unsupported,
            }
        }
        Err(e) => TranspileResult {
            powershell: format!("# TRANSPILE ERROR: {}\n# Original: {}", e, bash),
            used_fallbacks: false,
            warnings: vec![format!("Transpilation failed: {}", e)],
            unsupported: vec![bash.to_string()],
        },
    }
}
