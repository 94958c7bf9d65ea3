// src/commands/history_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct HistoryTranslator;
pub struct ClearTranslator;

impl Translator for HistoryTranslator {
    fn name(&self) -> &'static str {
        "history"
    }

    fn translate(&self, cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        match cmd.args.first().and_then(|w| w.literal_text()) {
            Some(count) if count.chars().all(|c| c.is_ascii_digit()) => {
                format!("Get-History -Count {}", count)
            }
            _ => "Get-History".to_string(),
        }
    }
}

impl Translator for ClearTranslator {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        "Clear-Host".to_string()
    }
}
