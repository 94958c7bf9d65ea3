// src/commands/xargs.rs
use crate::ast::{Quoting, SimpleCommand, Word};
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct XargsTranslator;

/// Stand-in for the piped item while the inner command goes through
/// translation
const ITEM_MARKER: &str = "__xargs_item__";

const SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('I', "replace"),
    FlagSpec::with_value('n', "max-args"),
    FlagSpec::new('0', "null"),
    FlagSpec::new('r', "no-run-if-empty"),
];

impl Translator for XargsTranslator {
    fn name(&self) -> &'static str {
        "xargs"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("max-args") {
            ctx.warn("xargs: -n batching is not supported; running once per item");
        }

        let replace_token = parsed
            .value_text("replace")
            .unwrap_or_else(|| "{}".to_string());
        let explicit_replace = parsed.has("replace");

        let words = parsed.positionals;
        if words.is_empty() {
            return "ForEach-Object { $_ }".to_string();
        }

        let has_placeholder = explicit_replace
            || words
                .iter()
                .any(|w| w.literal_text().as_deref() == Some(replace_token.as_str()));

        let substitute = |w: &Word| -> Word {
            if w.literal_text().as_deref() == Some(replace_token.as_str()) {
                Word::literal(ITEM_MARKER, Quoting::Unquoted)
            } else {
                w.clone()
            }
        };

        let mut args: Vec<Word> = words[1..].iter().map(substitute).collect();
        if !has_placeholder {
            args.push(Word::literal(ITEM_MARKER, Quoting::Unquoted));
        }
        let inner = SimpleCommand {
            assignments: Vec::new(),
            name: Some(substitute(&words[0])),
            args,
            redirects: Vec::new(),
        };
        let translated = crate::commands::types::substitute_item(
            crate::transform::translate_simple(&inner, ctx),
            ITEM_MARKER,
        );
        format!("ForEach-Object {{ {} }}", translated)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_appends_item_to_command() {
        let out = transpile("xargs rm", &opts());
        assert_eq!(out, "ForEach-Object { Remove-Item -Path $_ }");
    }

    #[test]
    fn test_replace_token() {
        let out = transpile("xargs -I {} mv {} backup/", &opts());
        assert!(out.contains("Move-Item"));
        assert!(out.contains("$_"));
        assert!(out.contains("backup/"));
    }

    #[test]
    fn test_passthrough_inner_command() {
        let out = transpile("git ls-files | xargs touch", &opts());
        assert!(out.contains("ForEach-Object {"));
        assert!(out.contains("$_"));
    }

    #[test]
    fn test_no_command_is_identity() {
        assert_eq!(transpile("xargs", &opts()), "ForEach-Object { $_ }");
    }
}
