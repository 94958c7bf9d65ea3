// src/commands/tee.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct TeeTranslator;

const SPECS: &[FlagSpec] = &[FlagSpec::new('a', "append")];

impl Translator for TeeTranslator {
    fn name(&self) -> &'static str {
        "tee"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        let file = match parsed.positionals.first() {
            Some(f) => translate_word(f, ctx),
            None => {
                ctx.warn("tee: no file given; passing stream through");
                return "ForEach-Object { $_ }".to_string();
            }
        };
        if parsed.positionals.len() > 1 {
            ctx.warn("tee: only the first file is written");
        }
        let mut out = format!("Tee-Object -FilePath {}", file);
        if parsed.has("append") {
            out.push_str(" -Append");
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
    fn test_tee() {
        assert_eq!(
            transpile("make 2>&1 | tee build.log", &opts()),
            "make 2>&1 | Tee-Object -FilePath build.log"
        );
    }

    #[test]
    fn test_tee_append() {
        let out = transpile("echo hi | tee -a log.txt", &opts());
        assert!(out.ends_with("Tee-Object -FilePath log.txt -Append"));
    }
}
