// src/commands/cd_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct CdTranslator;

impl Translator for CdTranslator {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        match cmd.args.first() {
            None => "Set-Location $env:USERPROFILE".to_string(),
            Some(w) if w.literal_text().as_deref() == Some("-") => {
                "Set-Location $OLDPWD".to_string()
            }
            Some(w) => format!("Set-Location {}", translate_word(w, ctx)),
        }
    }
}
