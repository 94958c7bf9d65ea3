// src/commands/cp.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct CpTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('r', "recursive"),
    FlagSpec::short('R'),
    FlagSpec::new('a', "archive"),
    FlagSpec::new('f', "force"),
    FlagSpec::new('v', "verbose"),
    FlagSpec::new('p', "preserve"),
];

impl Translator for CpTranslator {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.positionals.len() < 2 {
            ctx.warn("cp: expected source and destination");
            return crate::transform::passthrough(cmd, ctx);
        }
        let mut paths: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        let destination = paths.pop().unwrap_or_default();
        let mut out = format!(
            "Copy-Item -Path {} -Destination {}",
            paths.join(","),
            destination
        );
        if parsed.has("recursive") || parsed.has("R") || parsed.has("archive") {
            out.push_str(" -Recurse");
        }
        if parsed.has("force") || parsed.has("archive") {
            out.push_str(" -Force");
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
    fn test_copy_file() {
        assert_eq!(
            transpile("cp config.json config.bak", &opts()),
            "Copy-Item -Path 'config.json' -Destination 'config.bak'"
        );
    }

    #[test]
    fn test_copy_recursive() {
        assert_eq!(
            transpile("cp -r src backup/", &opts()),
            "Copy-Item -Path 'src' -Destination 'backup/' -Recurse"
        );
    }

    #[test]
    fn test_copy_multiple_sources() {
        assert_eq!(
            transpile("cp a.txt b.txt dest/", &opts()),
            "Copy-Item -Path 'a.txt','b.txt' -Destination 'dest/'"
        );
    }
}
