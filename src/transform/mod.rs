//! AST → PowerShell Transformation
//!
//! Walks the parsed script and emits PowerShell text. Statement lowering
//! lives here; word quoting, variable mapping, and redirect lowering live in
//! the submodules; per-command translation is dispatched through the
//! registry in `crate::commands`.

pub mod context;
pub mod redirects;
pub mod vars;
pub mod words;

pub use context::{PsVersion, TransformContext};

use crate::ast::{Command, Pipeline, Script, SimpleCommand, Statement, LogicalOp};
use crate::commands::registry;
use crate::transform::redirects::apply_redirects;
use crate::transform::words::translate_word;

/// Translate a whole script; statements join with `"; "`
pub fn translate_script(script: &Script, ctx: &mut TransformContext) -> String {
    let parts: Vec<String> = script
        .statements
        .iter()
        .map(|statement| translate_statement(statement, ctx))
        .filter(|text| !text.is_empty())
        .collect();
    parts.join("; ")
}

fn translate_statement(statement: &Statement, ctx: &mut TransformContext) -> String {
    match statement {
        Statement::Pipeline(pipeline) => translate_pipeline(pipeline, ctx),
        Statement::LogicalExpr { op, left, right } => {
            let left = translate_statement(left, ctx);
            let right = translate_statement(right, ctx);
            match op {
                LogicalOp::And => format!("{}; if ($?) {{ {} }}", left, right),
                LogicalOp::Or => format!("{}; if (-not $?) {{ {} }}", left, right),
                LogicalOp::Semi => format!("{}; {}", left, right),
            }
        }
        Statement::Assignments(assignments) => {
            let parts: Vec<String> = assignments
                .iter()
                .map(|a| format!("$env:{} = {}", a.name, translate_word(&a.value, ctx)))
                .collect();
            parts.join("; ")
        }
    }
}

fn translate_pipeline(pipeline: &Pipeline, ctx: &mut TransformContext) -> String {
    let segments: Vec<String> = pipeline
        .commands
        .iter()
        .map(|command| translate_command(command, ctx))
        .collect();
    let mut out = segments.join(" | ");
    if pipeline.negated {
        out = format!("!( {} )", out);
    }
    if pipeline.background {
        out = format!("Start-Job -ScriptBlock {{ {} }}", out);
    }
    out
}

fn translate_command(command: &Command, ctx: &mut TransformContext) -> String {
    match command {
        Command::Simple(simple) => translate_simple(simple, ctx),
        Command::Subshell(subshell) => {
            let body = translate_script(&subshell.body, ctx);
            let wrapped = format!("& {{ {} }}", body);
            apply_redirects(wrapped, &subshell.redirects, ctx)
        }
    }
}

/// Translate one simple command: inline assignments are prepended, the
/// command body comes from the registry (or passes through), and lowered
/// redirects wrap the result. Also the entry point for translators that
/// rebuild inner commands (xargs, find -exec, env).
pub fn translate_simple(simple: &SimpleCommand, ctx: &mut TransformContext) -> String {
    let mut prefix = String::new();
    for assignment in &simple.assignments {
        let value = translate_word(&assignment.value, ctx);
        prefix.push_str(&format!("$env:{} = {}; ", assignment.name, value));
    }

    let body = match &simple.name {
        None => String::new(),
        Some(name_word) => {
            let name = name_word.literal_text();
            match name.as_deref().and_then(registry::lookup) {
                Some(translator) => translator.translate(simple, ctx),
                None => passthrough(simple, ctx),
            }
        }
    };

    let with_redirects = apply_redirects(body, &simple.redirects, ctx);
    if prefix.is_empty() {
        with_redirects
    } else if with_redirects.is_empty() {
        // Assignment-only command; drop the trailing separator
        prefix.trim_end_matches("; ").to_string()
    } else {
        format!("{}{}", prefix, with_redirects)
    }
}

/// Unknown commands pass through: the name and each argument word-translate
/// and join with spaces. This default keeps arbitrary external tools
/// (git, npm, node, python, …) working.
pub fn passthrough(simple: &SimpleCommand, ctx: &mut TransformContext) -> String {
    let mut out = match &simple.name {
        Some(name_word) => translate_word(name_word, ctx),
        None => return String::new(),
    };
    for arg in &simple.args {
        out.push(' ');
        out.push_str(&translate_word(arg, ctx));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::tools::ToolAvailability;

    fn run(input: &str) -> String {
        let script = parse(input).unwrap();
        let mut ctx = TransformContext::new(ToolAvailability::none(), true, PsVersion::V5);
        translate_script(&script, &mut ctx)
    }

    #[test]
    fn test_passthrough_unknown_command() {
        assert_eq!(run("git status"), "git status");
        assert_eq!(run("npm install --save-dev typescript"), "npm install --save-dev typescript");
    }

    #[test]
    fn test_passthrough_quotes_arguments() {
        assert_eq!(run("git commit -m 'fix the bug'"), "git commit -m 'fix the bug'");
    }

    #[test]
    fn test_and_chain() {
        assert_eq!(
            run("cd frontend && npm install"),
            "Set-Location frontend; if ($?) { npm install }"
        );
    }

    #[test]
    fn test_or_chain() {
        assert_eq!(
            run("npm test || echo failed"),
            "npm test; if (-not $?) { Write-Output failed }"
        );
    }

    #[test]
    fn test_statements_join_with_semicolons() {
        assert_eq!(run("git add .; git commit"), "git add .; git commit");
    }

    #[test]
    fn test_background_pipeline() {
        assert_eq!(
            run("node server.js &"),
            "Start-Job -ScriptBlock { node server.js }"
        );
    }

    #[test]
    fn test_negated_pipeline() {
        assert_eq!(run("! git diff --quiet"), "!( git diff --quiet )");
    }

    #[test]
    fn test_subshell() {
        assert_eq!(
            run("(cd /tmp && git pull)"),
            "& { Set-Location $env:TEMP; if ($?) { git pull } }"
        );
    }

    #[test]
    fn test_bare_assignment() {
        assert_eq!(run("FOO=bar"), "$env:FOO = bar");
        assert_eq!(run("MSG='hello world'"), "$env:MSG = 'hello world'");
    }

    #[test]
    fn test_inline_assignment_prefixes() {
        assert_eq!(
            run("NODE_ENV=production npm run build"),
            "$env:NODE_ENV = production; npm run build"
        );
    }

    #[test]
    fn test_output_redirect_after_command() {
        assert_eq!(run("git log > history.txt"), "git log > history.txt");
    }

    #[test]
    fn test_stderr_to_stdout() {
        assert_eq!(run("npm run build 2>&1"), "npm run build 2>&1");
    }

    #[test]
    fn test_command_substitution_in_argument() {
        let out = run("git checkout $(git rev-parse HEAD)");
        assert_eq!(out, "git checkout $(git rev-parse HEAD)");
    }
}
