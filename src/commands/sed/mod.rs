// src/commands/sed/mod.rs
pub mod script;

use crate::ast::{SimpleCommand, Word};
use crate::commands::types::{placeholder, Translator};
use crate::transform::words::{ps_single_quote, quote_literal};
use crate::transform::TransformContext;

use script::{convert_replacement, parse_expr, SedExpr, Substitution};

pub struct SedTranslator;

struct SedOptions {
    quiet: bool,
    in_place: Option<String>,
    expressions: Vec<String>,
    files: Vec<Word>,
}

/// sed's `-i[SUFFIX]` takes its value attached, never separated, so the
/// flags are read by hand rather than through the shared parser.
fn parse_sed_args(args: &[Word], ctx: &mut TransformContext) -> SedOptions {
    let mut opts = SedOptions {
        quiet: false,
        in_place: None,
        expressions: Vec::new(),
        files: Vec::new(),
    };
    let mut positionals: Vec<Word> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let text = args[i].literal_text();
        match text.as_deref() {
            Some("-n") | Some("--quiet") | Some("--silent") => opts.quiet = true,
            Some("-E") | Some("-r") | Some("--regexp-extended") => {}
            Some("-e") | Some("--expression") => {
                if i + 1 < args.len() {
                    i += 1;
                    if let Some(expr) = args[i].literal_text() {
                        opts.expressions.push(expr);
                    }
                }
            }
            Some("-i") | Some("--in-place") => opts.in_place = Some(String::new()),
            Some(t) if t.starts_with("-i") => opts.in_place = Some(t[2..].to_string()),
            Some(t) if t.starts_with("--in-place=") => {
                opts.in_place = Some(t["--in-place=".len()..].to_string())
            }
            Some(t) if t.starts_with('-') && t.len() > 1 => {
                ctx.warn(format!("sed: flag '{}' not supported; ignored", t));
            }
            _ => positionals.push(args[i].clone()),
        }
        i += 1;
    }

    if opts.expressions.is_empty() && !positionals.is_empty() {
        if let Some(expr) = positionals[0].literal_text() {
            opts.expressions.push(expr);
            positionals.remove(0);
        }
    }
    opts.files = positionals;
    opts
}

impl Translator for SedTranslator {
    fn name(&self) -> &'static str {
        "sed"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let opts = parse_sed_args(&cmd.args, ctx);
        if opts.expressions.is_empty() {
            ctx.warn("sed: no expression given; passing through");
            return crate::transform::passthrough(cmd, ctx);
        }

        let mut segments: Vec<String> = Vec::new();
        for expr_text in &opts.expressions {
            match parse_expr(expr_text) {
                Ok(expr) => segments.push(emit_expr(&expr, opts.quiet, ctx)),
                Err(e) => {
                    ctx.warn(format!("sed: {}; left as comment", e));
                    ctx.unsupported(expr_text.clone());
                    segments.push(format!(
                        "ForEach-Object {{ $_ }} {}",
                        placeholder(&format!("sed expression not translated: {}", expr_text))
                    ));
                }
            }
        }
        let pipeline = segments.join(" | ");

        if let Some(suffix) = &opts.in_place {
            return emit_in_place(&opts.files, suffix, &pipeline, ctx);
        }

        if opts.files.is_empty() {
            return pipeline;
        }
        let files: Vec<String> = opts.files.iter().map(|f| quote_literal(f, ctx)).collect();
        format!("Get-Content {} | {}", files.join(","), pipeline)
    }
}

fn emit_expr(expr: &SedExpr, quiet: bool, ctx: &mut TransformContext) -> String {
    match expr {
        SedExpr::Substitute(sub) => emit_substitution(sub, ctx),
        SedExpr::DeleteLine(n) => format!(
            "ForEach-Object -Begin {{ $ln = 0 }} -Process {{ $ln++; if ($ln -ne {}) {{ $_ }} }}",
            n
        ),
        SedExpr::DeletePattern(pattern) => {
            format!("Where-Object {{ $_ -cnotmatch {} }}", ps_single_quote(pattern))
        }
        SedExpr::PrintLine(n) => format!("Select-Object -Skip {} -First 1", n - 1),
        SedExpr::PrintRange(a, b) => format!(
            "Select-Object -Skip {} -First {}",
            a - 1,
            b.saturating_sub(*a) + 1
        ),
        SedExpr::PrintPattern(pattern) => {
            if !quiet {
                ctx.warn("sed: p without -n would duplicate lines in bash; emitting matches only");
            }
            format!("Where-Object {{ $_ -cmatch {} }}", ps_single_quote(pattern))
        }
    }
}

/// bash sed is case-sensitive while PowerShell -replace is not, so the
/// global form uses -creplace unless the i flag asks otherwise. First-
/// occurrence substitutions go through [regex]::Replace with a count.
fn emit_substitution(sub: &Substitution, ctx: &mut TransformContext) -> String {
    if sub.print {
        ctx.warn("sed: s///p prints matched lines twice in bash; emitting the substitution only");
    }
    let pattern = ps_single_quote(&sub.pattern);
    let replacement = ps_single_quote(&convert_replacement(&sub.replacement));
    match (sub.global, sub.ignore_case) {
        (true, true) => format!("ForEach-Object {{ $_ -replace {}, {} }}", pattern, replacement),
        (true, false) => format!(
            "ForEach-Object {{ $_ -creplace {}, {} }}",
            pattern, replacement
        ),
        (false, true) => format!(
            "ForEach-Object {{ [regex]::new({}, 'IgnoreCase').Replace($_, {}, 1) }}",
            pattern, replacement
        ),
        (false, false) => format!(
            "ForEach-Object {{ ([regex]{}).Replace($_, {}, 1) }}",
            pattern, replacement
        ),
    }
}

/// `sed -i` rewrites each file in place: optional backup copy, then a
/// read/transform/write round trip.
fn emit_in_place(
    files: &[Word],
    suffix: &str,
    pipeline: &str,
    ctx: &mut TransformContext,
) -> String {
    if files.is_empty() {
        ctx.warn("sed: -i requires a file; emitting pipe form");
        return pipeline.to_string();
    }
    let mut statements = Vec::new();
    for file in files {
        let quoted = quote_literal(file, ctx);
        let mut statement = String::new();
        if !suffix.is_empty() {
            let backup = match file.literal_text() {
                Some(t) => ps_single_quote(&format!("{}{}", t, suffix)),
                None => format!("({} + '{}')", quoted, suffix),
            };
            statement.push_str(&format!("Copy-Item {} {}; ", quoted, backup));
        }
        statement.push_str(&format!(
            "(Get-Content {}) | {} | Set-Content {}",
            quoted, pipeline, quoted
        ));
        statements.push(statement);
    }
    statements.join("; ")
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, transpile_with_meta, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_global_substitution_is_case_sensitive() {
        let out = transpile("sed 's/foo/bar/g' file.txt", &opts());
        assert_eq!(
            out,
            "Get-Content 'file.txt' | ForEach-Object { $_ -creplace 'foo', 'bar' }"
        );
    }

    #[test]
    fn test_first_occurrence_substitution() {
        let out = transpile("echo x | sed 's/foo/bar/'", &opts());
        assert!(out.contains("([regex]'foo').Replace($_, 'bar', 1)"));
    }

    #[test]
    fn test_ignore_case_global() {
        let out = transpile("sed 's/foo/bar/gi' f.txt", &opts());
        assert!(out.contains("-replace 'foo', 'bar'"));
        assert!(!out.contains("-creplace"));
    }

    #[test]
    fn test_backrefs_and_ampersand() {
        let out = transpile(r"sed 's/\(a\+\)/[\1]/g' f.txt", &opts());
        assert!(out.contains("'[$1]'"));
        let out = transpile("sed 's/x/<&>/g' f.txt", &opts());
        assert!(out.contains("'<$0>'"));
    }

    #[test]
    fn test_delete_pattern() {
        let out = transpile("sed '/^#/d' config.txt", &opts());
        assert!(out.contains("Where-Object { $_ -cnotmatch '^#' }"));
    }

    #[test]
    fn test_delete_line() {
        let out = transpile("sed '1d' f.txt", &opts());
        assert!(out.contains("$ln -ne 1"));
    }

    #[test]
    fn test_print_range_with_quiet() {
        let out = transpile("sed -n '2,4p' f.txt", &opts());
        assert!(out.contains("Select-Object -Skip 1 -First 3"));
    }

    #[test]
    fn test_in_place_with_backup() {
        let out = transpile("sed -i.bak 's/a/b/g' conf.ini", &opts());
        assert!(out.contains("Copy-Item 'conf.ini' 'conf.ini.bak'"));
        assert!(out.contains("(Get-Content 'conf.ini')"));
        assert!(out.contains("Set-Content 'conf.ini'"));
    }

    #[test]
    fn test_in_place_without_backup() {
        let out = transpile("sed -i 's/a/b/g' conf.ini", &opts());
        assert!(!out.contains("Copy-Item"));
        assert!(out.contains("Set-Content 'conf.ini'"));
    }

    #[test]
    fn test_multiple_expressions_chain() {
        let out = transpile("sed -e 's/a/b/g' -e '/^$/d' f.txt", &opts());
        assert!(out.contains("-creplace 'a', 'b'"));
        assert!(out.contains("-cnotmatch '^$'"));
        assert!(out.contains(" | Where-Object"));
    }

    #[test]
    fn test_unsupported_expression_warns() {
        let result = transpile_with_meta("sed 'y/abc/xyz/' f.txt", &opts());
        assert!(result.powershell.contains("<#"));
        assert!(!result.warnings.is_empty());
        assert!(!result.unsupported.is_empty());
    }
}
