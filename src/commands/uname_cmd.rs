// src/commands/uname_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct UnameTranslator;

impl Translator for UnameTranslator {
    fn name(&self) -> &'static str {
        "uname"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let flag = cmd.args.first().and_then(|w| w.literal_text());
        match flag.as_deref() {
            None | Some("-s") => "$env:OS".to_string(),
            Some("-m") | Some("-p") => "$env:PROCESSOR_ARCHITECTURE".to_string(),
            Some("-r") | Some("-v") => {
                "[System.Environment]::OSVersion.Version.ToString()".to_string()
            }
            Some("-n") => "$env:COMPUTERNAME".to_string(),
            Some("-a") => {
                "\"$env:OS $env:COMPUTERNAME $([System.Environment]::OSVersion.Version) $env:PROCESSOR_ARCHITECTURE\""
                    .to_string()
            }
            Some(other) => {
                ctx.warn(format!("uname: flag '{}' not supported", other));
                "$env:OS".to_string()
            }
        }
    }
}
