// src/commands/grep/mod.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct GrepTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('i', "ignore-case"),
    FlagSpec::new('v', "invert-match"),
    FlagSpec::new('c', "count"),
    FlagSpec::new('l', "files-with-matches"),
    FlagSpec::new('n', "line-number"),
    FlagSpec::new('o', "only-matching"),
    FlagSpec::new('q', "quiet"),
    FlagSpec::long("silent"),
    FlagSpec::new('r', "recursive"),
    FlagSpec::short('R'),
    FlagSpec::new('E', "extended-regexp"),
    FlagSpec::new('F', "fixed-strings"),
    FlagSpec::with_value('e', "regexp"),
    FlagSpec::with_value('m', "max-count"),
    FlagSpec::long_value("include"),
];

struct GrepOptions {
    pattern: Option<crate::ast::Word>,
    files: Vec<crate::ast::Word>,
    ignore_case: bool,
    invert: bool,
    count: bool,
    files_with_matches: bool,
    line_number: bool,
    only_matching: bool,
    quiet: bool,
    fixed: bool,
    recursive: bool,
    max_count: Option<String>,
}

fn parse_grep_args(cmd: &SimpleCommand) -> GrepOptions {
    let parsed = ParsedArgs::parse(&cmd.args, SPECS);
    let mut positionals = parsed.positionals.clone();

    let pattern = match parsed.value("regexp") {
        Some(w) => Some(w.clone()),
        None if !positionals.is_empty() => Some(positionals.remove(0)),
        None => None,
    };

    let invoked_as = cmd
        .name
        .as_ref()
        .and_then(|w| w.literal_text())
        .unwrap_or_default();

    GrepOptions {
        pattern,
        files: positionals,
        ignore_case: parsed.has("ignore-case"),
        invert: parsed.has("invert-match"),
        count: parsed.has("count"),
        files_with_matches: parsed.has("files-with-matches"),
        line_number: parsed.has("line-number"),
        only_matching: parsed.has("only-matching"),
        quiet: parsed.has("quiet") || parsed.has("silent"),
        fixed: parsed.has("fixed-strings") || invoked_as == "fgrep",
        recursive: parsed.has("recursive") || parsed.has("R"),
        max_count: parsed.value_text("max-count"),
    }
}

impl Translator for GrepTranslator {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["egrep", "fgrep"]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let opts = parse_grep_args(cmd);
        let pattern = match &opts.pattern {
            Some(p) => quote_literal(p, ctx),
            None => {
                ctx.warn("grep: no pattern given; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };

        if ctx.use_native(ctx.tools.rg) {
            translate_rg(&opts, pattern, ctx)
        } else {
            ctx.mark_fallback();
            translate_select_string(&opts, pattern, ctx)
        }
    }
}

/// Native path: ripgrep flag-for-flag. rg recurses by default, numbers
/// lines on demand, and reads stdin when no path is given, so the mapping
/// is direct.
fn translate_rg(opts: &GrepOptions, pattern: String, ctx: &mut TransformContext) -> String {
    let mut out = String::from("rg --no-heading");
    if opts.ignore_case {
        out.push_str(" -i");
    }
    if opts.invert {
        out.push_str(" -v");
    }
    if opts.line_number {
        out.push_str(" -n");
    }
    if opts.files_with_matches {
        out.push_str(" -l");
    }
    if opts.count {
        out.push_str(" -c");
    }
    if opts.only_matching {
        out.push_str(" -o");
    }
    if opts.quiet {
        out.push_str(" -q");
    }
    if opts.fixed {
        out.push_str(" -F");
    }
    if let Some(m) = &opts.max_count {
        out.push_str(&format!(" -m {}", m));
    }
    out.push(' ');
    out.push_str(&pattern);
    for file in &opts.files {
        out.push(' ');
        out.push_str(&quote_literal(file, ctx));
    }
    out
}

/// Fallback path: Select-String with output shaped to match bash grep,
/// because downstream agents parse it. Get-ChildItem enters the pipeline
/// only for -r; the piped form stays a pure Select-String.
fn translate_select_string(
    opts: &GrepOptions,
    pattern: String,
    ctx: &mut TransformContext,
) -> String {
    let multi = opts.files.len() > 1 || opts.recursive;

    let mut out = String::new();
    if opts.recursive {
        let dirs: Vec<String> = opts
            .files
            .iter()
            .map(|f| quote_literal(f, ctx))
            .collect();
        let dir = if dirs.is_empty() {
            ".".to_string()
        } else {
            dirs.join(",")
        };
        out.push_str(&format!("Get-ChildItem -Path {} -Recurse -File | ", dir));
    }

    out.push_str("Select-String -Pattern ");
    out.push_str(&pattern);
    if !opts.ignore_case {
        out.push_str(" -CaseSensitive");
    }
    if opts.invert {
        out.push_str(" -NotMatch");
    }
    if opts.fixed {
        out.push_str(" -SimpleMatch");
    }
    if !opts.recursive && !opts.files.is_empty() {
        let files: Vec<String> = opts
            .files
            .iter()
            .map(|f| quote_literal(f, ctx))
            .collect();
        out.push_str(&format!(" -Path {}", files.join(",")));
    }

    if let Some(m) = &opts.max_count {
        out.push_str(&format!(" | Select-Object -First {}", m));
    }

    // Output shaping, in bash grep's priority order
    if opts.quiet {
        out.push_str(" | Out-Null");
    } else if opts.files_with_matches {
        out.push_str(" | Select-Object -ExpandProperty Path -Unique");
    } else if opts.count {
        if multi {
            out.push_str(" | Group-Object Path | ForEach-Object { \"$($_.Name):$($_.Count)\" }");
        } else {
            out.push_str(" | Measure-Object | ForEach-Object { $_.Count }");
        }
    } else if opts.only_matching {
        out.push_str(" | ForEach-Object { $_.Matches.Value }");
    } else if multi {
        if opts.line_number {
            out.push_str(" | ForEach-Object { \"$($_.Path):$($_.LineNumber):$($_.Line)\" }");
        } else {
            out.push_str(" | ForEach-Object { \"$($_.Path):$($_.Line)\" }");
        }
    } else if opts.line_number {
        out.push_str(" | ForEach-Object { \"$($_.LineNumber):$($_.Line)\" }");
    } else {
        out.push_str(" | ForEach-Object { $_.Line }");
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::tools::ToolAvailability;
    use crate::transform::{PsVersion, TransformContext};
    use crate::transpiler::{transpile, TranspileOptions};

    fn with_rg() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability {
                rg: true,
                ..ToolAvailability::none()
            }),
            ..Default::default()
        }
    }

    fn fallback() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability::none()),
            ..Default::default()
        }
    }

    #[test]
    fn test_native_recursive() {
        let out = transpile("grep -r \"TODO\" src/", &with_rg());
        assert!(out.starts_with("rg"));
        assert!(out.ends_with("'TODO' 'src/'"));
    }

    #[test]
    fn test_native_flags() {
        let out = transpile("grep -in pattern file.txt", &with_rg());
        assert!(out.contains(" -i"));
        assert!(out.contains(" -n"));
        assert!(out.contains("'pattern'"));
    }

    #[test]
    fn test_fallback_single_file_shape() {
        let out = transpile("grep pattern file.txt", &fallback());
        assert!(out.contains("ForEach-Object { $_.Line }"));
        assert!(!out.contains("Get-ChildItem"));
        assert!(out.contains("-Path 'file.txt'"));
        assert!(out.contains("-CaseSensitive"));
    }

    #[test]
    fn test_fallback_recursive_shape() {
        let out = transpile("grep -r pattern src/", &fallback());
        assert!(out.contains("Get-ChildItem"));
        assert!(out.contains("-Recurse"));
        assert!(out.contains("$($_.Path):$($_.Line)"));
    }

    #[test]
    fn test_fallback_piped_is_pure_select_string() {
        let out = transpile("grep pattern", &fallback());
        assert!(!out.contains("Get-ChildItem"));
        assert!(!out.contains("-Path"));
    }

    #[test]
    fn test_fallback_line_numbers() {
        let out = transpile("grep -n pattern file.txt", &fallback());
        assert!(out.contains("$($_.LineNumber):$($_.Line)"));
    }

    #[test]
    fn test_fallback_count_single() {
        let out = transpile("grep -c pattern file.txt", &fallback());
        assert!(out.contains("Measure-Object"));
        assert!(out.contains("$_.Count"));
    }

    #[test]
    fn test_fallback_count_multi() {
        let out = transpile("grep -c pattern a.txt b.txt", &fallback());
        assert!(out.contains("Group-Object Path"));
    }

    #[test]
    fn test_fallback_files_with_matches() {
        let out = transpile("grep -l pattern a.txt b.txt", &fallback());
        assert!(out.contains("-ExpandProperty Path -Unique"));
    }

    #[test]
    fn test_fallback_quiet_discards_output() {
        let out = transpile("grep -q pattern file.txt", &fallback());
        assert!(out.ends_with("Out-Null"));
    }

    #[test]
    fn test_fallback_only_matching() {
        let out = transpile("grep -o pattern file.txt", &fallback());
        assert!(out.contains("$_.Matches.Value"));
    }

    #[test]
    fn test_ignore_case_drops_case_sensitive() {
        let out = transpile("grep -i pattern file.txt", &fallback());
        assert!(!out.contains("-CaseSensitive"));
    }

    #[test]
    fn test_fgrep_is_simple_match() {
        let out = transpile("fgrep a.b file.txt", &fallback());
        assert!(out.contains("-SimpleMatch"));
    }

    #[test]
    fn test_fallback_marks_context() {
        use crate::parser::parse;
        let script = parse("grep x f.txt").unwrap();
        let mut ctx = TransformContext::new(ToolAvailability::none(), true, PsVersion::V5);
        crate::transform::translate_script(&script, &mut ctx);
        assert!(ctx.used_fallbacks);
    }

    #[test]
    fn test_native_does_not_mark_fallback() {
        use crate::parser::parse;
        let script = parse("grep x f.txt").unwrap();
        let mut ctx = TransformContext::new(ToolAvailability::all(), true, PsVersion::V5);
        crate::transform::translate_script(&script, &mut ctx);
        assert!(!ctx.used_fallbacks);
    }
}
