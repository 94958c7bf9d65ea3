// src/commands/types.rs
use crate::ast::SimpleCommand;
use crate::transform::TransformContext;

/// A command translator: maps one bash command invocation to PowerShell
/// text. Translators receive the parsed command and the shared context;
/// they report semantic shortfalls through `ctx.warn` / `ctx.unsupported`
/// and flag non-native output with `ctx.mark_fallback`.
pub trait Translator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Additional names dispatched to this translator
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String;
}

/// Inline placeholder for a construct with no clean Windows equivalent.
/// Block-comment form so it survives `"; "` joining.
pub fn placeholder(text: &str) -> String {
    format!("<# {} #>", text.replace("#>", "# >"))
}

/// Swap a translated item marker for `$_`, whether or not the inner
/// translator quoted it.
pub fn substitute_item(text: String, marker: &str) -> String {
    text.replace(&format!("'{}'", marker), "$_")
        .replace(marker, "$_")
}
