// src/commands/touch.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct TouchTranslator;

const SPECS: &[FlagSpec] = &[FlagSpec::new('a', "access"), FlagSpec::new('m', "modify")];

impl Translator for TouchTranslator {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.positionals.is_empty() {
            ctx.warn("touch: missing operand");
            return crate::commands::types::placeholder("touch");
        }
        let statements: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| {
                let path = quote_literal(p, ctx);
                format!(
                    "if (Test-Path {0}) {{ (Get-Item {0}).LastWriteTime = Get-Date }} else {{ New-Item -ItemType File -Path {0} | Out-Null }}",
                    path
                )
            })
            .collect();
        statements.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_touch_updates_or_creates() {
        let out = transpile("touch marker.txt", &TranspileOptions::default());
        assert!(out.contains("if (Test-Path 'marker.txt')"));
        assert!(out.contains("LastWriteTime = Get-Date"));
        assert!(out.contains("New-Item -ItemType File -Path 'marker.txt'"));
    }
}
