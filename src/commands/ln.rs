// src/commands/ln.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct LnTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('s', "symbolic"),
    FlagSpec::new('f', "force"),
];

impl Translator for LnTranslator {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        let (target, link) = match (parsed.positionals.first(), parsed.positionals.get(1)) {
            (Some(t), Some(l)) => (quote_literal(t, ctx), quote_literal(l, ctx)),
            _ => {
                ctx.warn("ln: expected target and link name");
                return crate::transform::passthrough(cmd, ctx);
            }
        };
        let item_type = if parsed.has("symbolic") {
            ctx.warn("ln: symbolic links require Developer Mode or elevation on Windows");
            "SymbolicLink"
        } else {
            "HardLink"
        };
        let mut out = format!(
            "New-Item -ItemType {} -Path {} -Target {}",
            item_type, link, target
        );
        if parsed.has("force") {
            out.push_str(" -Force");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, transpile_with_meta, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_symlink() {
        let result = transpile_with_meta("ln -s /opt/tool/bin/tool tool", &opts());
        assert_eq!(
            result.powershell,
            "New-Item -ItemType SymbolicLink -Path 'tool' -Target '/opt/tool/bin/tool'"
        );
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_hard_link() {
        assert_eq!(
            transpile("ln data.bin mirror.bin", &opts()),
            "New-Item -ItemType HardLink -Path 'mirror.bin' -Target 'data.bin'"
        );
    }
}
