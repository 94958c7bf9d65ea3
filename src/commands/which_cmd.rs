// src/commands/which_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct WhichTranslator;

impl Translator for WhichTranslator {
    fn name(&self) -> &'static str {
        "which"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        match cmd.args.iter().find(|w| {
            w.literal_text()
                .map(|t| !t.starts_with('-'))
                .unwrap_or(true)
        }) {
            Some(name) => format!(
                "Get-Command {} -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Source",
                translate_word(name, ctx)
            ),
            None => {
                ctx.warn("which: missing command name");
                crate::commands::types::placeholder("which")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_which() {
        assert_eq!(
            transpile("which node", &TranspileOptions::default()),
            "Get-Command node -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Source"
        );
    }
}
