// src/commands/true_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct TrueTranslator;
pub struct FalseTranslator;

impl Translator for TrueTranslator {
    fn name(&self) -> &'static str {
        "true"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        // Succeeds quietly; $? stays true for chained conditionals
        "$true | Out-Null".to_string()
    }
}

impl Translator for FalseTranslator {
    fn name(&self) -> &'static str {
        "false"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        // A native non-zero exit is the only way to make $? false in 5.1
        "cmd /c exit 1".to_string()
    }
}
