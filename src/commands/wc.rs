// src/commands/wc.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct WcTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('l', "lines"),
    FlagSpec::new('w', "words"),
    FlagSpec::new('c', "bytes"),
    FlagSpec::new('m', "chars"),
];

impl Translator for WcTranslator {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);

        let prefix = if parsed.positionals.is_empty() {
            String::new()
        } else {
            let files: Vec<String> = parsed
                .positionals
                .iter()
                .map(|f| translate_word(f, ctx))
                .collect();
            format!("Get-Content {} | ", files.join(","))
        };

        let body = if parsed.has("lines") {
            "Measure-Object -Line | ForEach-Object { $_.Lines }"
        } else if parsed.has("words") {
            "Measure-Object -Word | ForEach-Object { $_.Words }"
        } else if parsed.has("bytes") || parsed.has("chars") {
            "Measure-Object -Character | ForEach-Object { $_.Characters }"
        } else {
            "Measure-Object -Line -Word -Character | ForEach-Object { \"$($_.Lines) $($_.Words) $($_.Characters)\" }"
        };

        format!("{}{}", prefix, body)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_line_count_piped() {
        assert_eq!(
            transpile("wc -l", &opts()),
            "Measure-Object -Line | ForEach-Object { $_.Lines }"
        );
    }

    #[test]
    fn test_line_count_of_file() {
        assert_eq!(
            transpile("wc -l notes.txt", &opts()),
            "Get-Content notes.txt | Measure-Object -Line | ForEach-Object { $_.Lines }"
        );
    }

    #[test]
    fn test_word_count() {
        let out = transpile("wc -w", &opts());
        assert!(out.contains("-Word"));
        assert!(out.contains("$_.Words"));
    }

    #[test]
    fn test_char_count() {
        let out = transpile("wc -c", &opts());
        assert!(out.contains("-Character"));
    }

    #[test]
    fn test_default_shows_all_three() {
        let out = transpile("wc notes.txt", &opts());
        assert!(out.contains("$($_.Lines) $($_.Words) $($_.Characters)"));
    }

    #[test]
    fn test_input_redirect_composes() {
        assert_eq!(
            transpile("wc -l < file.txt", &opts()),
            "Get-Content file.txt | Measure-Object -Line | ForEach-Object { $_.Lines }"
        );
    }
}
