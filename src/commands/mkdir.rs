// src/commands/mkdir.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct MkdirTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('p', "parents"),
    FlagSpec::new('v', "verbose"),
    FlagSpec::with_value('m', "mode"),
];

impl Translator for MkdirTranslator {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("mode") {
            ctx.warn("mkdir: -m modes are not applied on Windows");
        }
        if parsed.positionals.is_empty() {
            ctx.warn("mkdir: missing operand");
            return crate::commands::types::placeholder("mkdir");
        }
        let paths: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        if parsed.has("parents") {
            format!("New-Item -ItemType Directory -Force -Path {}", paths.join(","))
        } else {
            format!("New-Item -ItemType Directory -Path {}", paths.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_mkdir() {
        assert_eq!(
            transpile("mkdir build", &opts()),
            "New-Item -ItemType Directory -Path 'build'"
        );
    }

    #[test]
    fn test_mkdir_parents() {
        assert_eq!(
            transpile("mkdir -p build", &opts()),
            "New-Item -ItemType Directory -Force -Path 'build'"
        );
    }

    #[test]
    fn test_mkdir_nested() {
        assert_eq!(
            transpile("mkdir -p a/b/c", &opts()),
            "New-Item -ItemType Directory -Force -Path 'a/b/c'"
        );
    }
}
