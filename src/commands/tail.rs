// src/commands/tail.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::head::take_legacy_count;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct TailTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('n', "lines"),
    FlagSpec::with_value('c', "bytes"),
    FlagSpec::new('f', "follow"),
];

impl Translator for TailTranslator {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let (legacy, args) = take_legacy_count(&cmd.args);
        let parsed = ParsedArgs::parse(&args, SPECS);
        if parsed.has("bytes") {
            ctx.warn("tail: -c counts lines here, not bytes");
        }
        let count = parsed
            .value_text("lines")
            .or_else(|| parsed.value_text("bytes"))
            .or(legacy)
            .map(|c| c.trim_start_matches('+').to_string())
            .unwrap_or_else(|| "10".to_string());
        let follow = parsed.has("follow");

        match parsed.positionals.first() {
            Some(file) => {
                let file = translate_word(file, ctx);
                if follow {
                    format!("Get-Content {} -Wait -Tail {}", file, count)
                } else {
                    format!("Get-Content {} -Tail {}", file, count)
                }
            }
            None => {
                if follow {
                    ctx.warn("tail: -f without a file is not supported");
                }
                format!("Select-Object -Last {}", count)
            }
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
    fn test_default_count() {
        assert_eq!(
            transpile("tail build.log", &opts()),
            "Get-Content build.log -Tail 10"
        );
    }

    #[test]
    fn test_follow() {
        assert_eq!(
            transpile("tail -f build.log", &opts()),
            "Get-Content build.log -Wait -Tail 10"
        );
    }

    #[test]
    fn test_count_and_file() {
        assert_eq!(
            transpile("tail -n 50 build.log", &opts()),
            "Get-Content build.log -Tail 50"
        );
    }

    #[test]
    fn test_piped_form() {
        assert_eq!(
            transpile("git log | tail -3", &opts()),
            "git log | Select-Object -Last 3"
        );
    }
}
