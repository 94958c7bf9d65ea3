// src/commands/diff_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct DiffTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('u', "unified"),
    FlagSpec::new('r', "recursive"),
    FlagSpec::new('q', "brief"),
];

impl Translator for DiffTranslator {
    fn name(&self) -> &'static str {
        "diff"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("unified") {
            ctx.warn("diff: unified format is not reproduced; Compare-Object output differs");
        }
        let (a, b) = match (parsed.positionals.first(), parsed.positionals.get(1)) {
            (Some(a), Some(b)) => (translate_word(a, ctx), translate_word(b, ctx)),
            _ => {
                ctx.warn("diff: expected two files; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };
        let mut out = format!("Compare-Object (Get-Content {}) (Get-Content {})", a, b);
        if parsed.has("brief") {
            out.push_str(" | Select-Object -First 1 | ForEach-Object { \"Files differ\" }");
        } else {
            out.push_str(" | ForEach-Object { \"$($_.SideIndicator) $($_.InputObject)\" }");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_two_files() {
        let out = transpile("diff old.txt new.txt", &opts());
        assert!(out.starts_with("Compare-Object (Get-Content old.txt) (Get-Content new.txt)"));
        assert!(out.contains("SideIndicator"));
    }

    #[test]
    fn test_unified_warns() {
        use crate::transpiler::transpile_with_meta;
        let result = transpile_with_meta("diff -u a.txt b.txt", &opts());
        assert!(!result.warnings.is_empty());
    }
}
