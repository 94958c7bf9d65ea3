// src/commands/dirname.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct DirnameTranslator;

impl Translator for DirnameTranslator {
    fn name(&self) -> &'static str {
        "dirname"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        match cmd.args.first() {
            Some(p) => format!("Split-Path -Parent {}", translate_word(p, ctx)),
            None => {
                ctx.warn("dirname: missing operand");
                crate::commands::types::placeholder("dirname")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_dirname() {
        assert_eq!(
            transpile("dirname src/lib/util.ts", &TranspileOptions::default()),
            "Split-Path -Parent src/lib/util.ts"
        );
    }
}
