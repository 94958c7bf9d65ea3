// src/commands/hostname_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct HostnameTranslator;

impl Translator for HostnameTranslator {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        "$env:COMPUTERNAME".to_string()
    }
}
