// src/commands/date_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::ps_single_quote;
use crate::transform::TransformContext;

pub struct DateTranslator;

impl Translator for DateTranslator {
    fn name(&self) -> &'static str {
        "date"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut utc = false;
        let mut format: Option<String> = None;
        for arg in &cmd.args {
            match arg.literal_text().as_deref() {
                Some("-u") | Some("--utc") => utc = true,
                Some("-I") | Some("--iso-8601") => {
                    format = Some("%Y-%m-%d".to_string());
                }
                Some(t) if t.starts_with('+') => format = Some(t[1..].to_string()),
                Some(t) => ctx.warn(format!("date: argument '{}' not supported; ignored", t)),
                None => ctx.warn("date: dynamic arguments are not supported; ignored"),
            }
        }

        match format {
            // Get-Date -UFormat understands strftime specifiers directly
            Some(f) => {
                if utc {
                    ctx.warn("date: -u with a format renders local time");
                }
                format!("Get-Date -UFormat {}", ps_single_quote(&f))
            }
            None if utc => "(Get-Date).ToUniversalTime()".to_string(),
            None => "Get-Date".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(transpile("date", &opts()), "Get-Date");
    }

    #[test]
    fn test_strftime_format() {
        assert_eq!(
            transpile("date +%Y-%m-%d", &opts()),
            "Get-Date -UFormat '%Y-%m-%d'"
        );
    }

    #[test]
    fn test_epoch_seconds() {
        assert_eq!(transpile("date +%s", &opts()), "Get-Date -UFormat '%s'");
    }

    #[test]
    fn test_utc() {
        assert_eq!(transpile("date -u", &opts()), "(Get-Date).ToUniversalTime()");
    }
}
