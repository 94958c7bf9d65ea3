// src/commands/head.rs
use crate::ast::{SimpleCommand, Word};
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct HeadTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('n', "lines"),
    FlagSpec::with_value('c', "bytes"),
];

/// Recognize the legacy `head -5` form before GNU flag parsing
pub(crate) fn take_legacy_count(args: &[Word]) -> (Option<String>, Vec<Word>) {
    let mut rest = Vec::new();
    let mut count = None;
    for word in args {
        if count.is_none() {
            if let Some(text) = word.literal_text() {
                if let Some(digits) = text.strip_prefix('-') {
                    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                        count = Some(digits.to_string());
                        continue;
                    }
                }
            }
        }
        rest.push(word.clone());
    }
    (count, rest)
}

impl Translator for HeadTranslator {
    fn name(&self) -> &'static str {
        "head"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let (legacy, args) = take_legacy_count(&cmd.args);
        let parsed = ParsedArgs::parse(&args, SPECS);
        if parsed.has("bytes") {
            ctx.warn("head: -c counts lines here, not bytes");
        }
        let count = parsed
            .value_text("lines")
            .or_else(|| parsed.value_text("bytes"))
            .or(legacy)
            .unwrap_or_else(|| "10".to_string());

        if parsed.positionals.is_empty() {
            return format!("Select-Object -First {}", count);
        }
        if parsed.positionals.len() > 1 {
            ctx.warn("head: multiple files emit one merged stream");
        }
        let files: Vec<String> = parsed
            .positionals
            .iter()
            .map(|f| translate_word(f, ctx))
            .collect();
        format!("Get-Content {} -TotalCount {}", files.join(","), count)
    }
}
