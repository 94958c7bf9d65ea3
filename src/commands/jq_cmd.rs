// src/commands/jq_cmd.rs
//
// jq is dual-path like the other native tools: pass through when jq.exe is
// on PATH, otherwise translate simple `.a.b` filters onto ConvertFrom-Json.

use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::{placeholder, Translator};
use crate::transform::words::{quote_literal, translate_word};
use crate::transform::TransformContext;

pub struct JqTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('r', "raw-output"),
    FlagSpec::new('c', "compact-output"),
    FlagSpec::new('e', "exit-status"),
];

lazy_static! {
    static ref FIELD_PATH: Regex = Regex::new(r"^\.(\w+(\.\w+)*)$").unwrap();
}

impl Translator for JqTranslator {
    fn name(&self) -> &'static str {
        "jq"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        if ctx.use_native(ctx.tools.jq) {
            let mut out = String::from("jq");
            for arg in &cmd.args {
                out.push(' ');
                out.push_str(&quote_for_jq(arg, ctx));
            }
            return out;
        }
        ctx.mark_fallback();

        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        let filter = match parsed.positionals.first().and_then(|w| w.literal_text()) {
            Some(f) => f,
            None => {
                ctx.warn("jq: no filter given; emitting plain JSON parse");
                return "ConvertFrom-Json".to_string();
            }
        };
        let file = parsed.positionals.get(1).cloned();

        let body = if filter == "." {
            "ConvertFrom-Json".to_string()
        } else if let Some(caps) = FIELD_PATH.captures(&filter) {
            format!("ConvertFrom-Json | ForEach-Object {{ $_.{} }}", &caps[1])
        } else {
            ctx.warn(format!("jq: filter '{}' not translated", filter));
            ctx.unsupported(filter.clone());
            format!(
                "ConvertFrom-Json {}",
                placeholder(&format!("jq filter not translated: {}", filter))
            )
        };

        match file {
            Some(f) => format!("Get-Content {} -Raw | {}", translate_word(&f, ctx), body),
            None => body,
        }
    }
}

/// Native path keeps filters single-quoted so PowerShell leaves them alone
fn quote_for_jq(word: &crate::ast::Word, ctx: &mut TransformContext) -> String {
    match word.literal_text() {
        Some(text) if text.starts_with('-') => text,
        _ => quote_literal(word, ctx),
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::ToolAvailability;
    use crate::transpiler::{transpile, TranspileOptions};

    fn with_jq() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability {
                jq: true,
                ..ToolAvailability::none()
            }),
            ..Default::default()
        }
    }

    fn fallback() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability::none()),
            ..Default::default()
        }
    }

    #[test]
    fn test_native_passthrough() {
        let out = transpile("curl -s http://x | jq -r '.name'", &with_jq());
        assert!(out.ends_with("jq -r '.name'"));
    }

    #[test]
    fn test_fallback_identity() {
        let out = transpile("cat pkg.json | jq .", &fallback());
        assert!(out.ends_with("ConvertFrom-Json"));
    }

    #[test]
    fn test_fallback_field_path() {
        let out = transpile("cat pkg.json | jq .version", &fallback());
        assert!(out.contains("ConvertFrom-Json | ForEach-Object { $_.version }"));
    }

    #[test]
    fn test_fallback_nested_path() {
        let out = transpile("jq .scripts.build package.json", &fallback());
        assert!(out.starts_with("Get-Content package.json -Raw"));
        assert!(out.contains("$_.scripts.build"));
    }

    #[test]
    fn test_complex_filter_is_commented() {
        use crate::transpiler::transpile_with_meta;
        let result = transpile_with_meta("jq '.[] | .name' data.json", &fallback());
        assert!(result.powershell.contains("<#"));
        assert!(!result.warnings.is_empty());
    }
}
