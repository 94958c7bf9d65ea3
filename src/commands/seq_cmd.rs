// src/commands/seq_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct SeqTranslator;

impl Translator for SeqTranslator {
    fn name(&self) -> &'static str {
        "seq"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let numbers: Vec<i64> = cmd
            .args
            .iter()
            .filter_map(|w| w.literal_text())
            .filter_map(|t| t.parse().ok())
            .collect();
        match numbers.as_slice() {
            [last] => format!("1..{}", last),
            [first, last] => format!("{}..{}", first, last),
            [first, step, last] if *step > 0 => format!(
                "{}..{} | Where-Object {{ (($_ - {}) % {}) -eq 0 }}",
                first, last, first, step
            ),
            _ => {
                ctx.warn("seq: expected 1-3 numeric arguments");
                crate::transform::passthrough(cmd, ctx)
            }
        }
    }
}
