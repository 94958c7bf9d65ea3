// src/commands/tr_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::ps_single_quote;
use crate::transform::TransformContext;

pub struct TrTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('d', "delete"),
    FlagSpec::new('s', "squeeze-repeats"),
];

/// Render a tr set as a regex character class body. `-` stays bare so
/// ranges like 0-9 keep working.
fn char_class(set: &str) -> String {
    let mut out = String::new();
    for c in set.chars() {
        if "\\^][".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl Translator for TrTranslator {
    fn name(&self) -> &'static str {
        "tr"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        let sets = parsed.positional_texts();

        if parsed.has("delete") {
            if let Some(set) = sets.first() {
                return format!(
                    "ForEach-Object {{ $_ -replace {}, '' }}",
                    ps_single_quote(&format!("[{}]", char_class(set)))
                );
            }
            ctx.warn("tr: -d without a set; passing through");
            return crate::transform::passthrough(cmd, ctx);
        }
        if parsed.has("squeeze-repeats") {
            if let Some(set) = sets.first() {
                return format!(
                    "ForEach-Object {{ $_ -replace {}, '$1' }}",
                    ps_single_quote(&format!("([{}])\\1+", char_class(set)))
                );
            }
        }

        let (from, to) = match (sets.first(), sets.get(1)) {
            (Some(f), Some(t)) => (f.clone(), t.clone()),
            _ => {
                ctx.warn("tr: expected two sets; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };

        match (from.as_str(), to.as_str()) {
            ("a-z", "A-Z") | ("[:lower:]", "[:upper:]") => {
                "ForEach-Object { $_.ToUpper() }".to_string()
            }
            ("A-Z", "a-z") | ("[:upper:]", "[:lower:]") => {
                "ForEach-Object { $_.ToLower() }".to_string()
            }
            _ if from.chars().count() == 1 && to.chars().count() == 1 => format!(
                "ForEach-Object {{ $_.Replace({}, {}) }}",
                ps_single_quote(&from),
                ps_single_quote(&to)
            ),
            _ => {
                ctx.warn(format!(
                    "tr: set translation '{}' -> '{}' not supported",
                    from, to
                ));
                ctx.unsupported(format!("tr {} {}", from, to));
                "ForEach-Object { $_ }".to_string()
            }
        }
    }
}
