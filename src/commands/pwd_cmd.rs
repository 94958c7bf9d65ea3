// src/commands/pwd_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct PwdTranslator;

impl Translator for PwdTranslator {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        "Get-Location | Select-Object -ExpandProperty Path".to_string()
    }
}
