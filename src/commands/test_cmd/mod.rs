// src/commands/test_cmd/mod.rs
//
// test / [ translate to PowerShell boolean expressions: unary file and
// string predicates, binary comparisons, negation, and -a/-o chaining.
// The emitted expression evaluates to $true/$false; callers relying on the
// exit status of `[ … ] && …` get expression-success semantics instead.

use crate::ast::{SimpleCommand, Word, WordPart};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct TestTranslator;

impl Translator for TestTranslator {
    fn name(&self) -> &'static str {
        "test"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["["]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut operands: Vec<Word> = cmd.args.clone();
        if cmd
            .name
            .as_ref()
            .and_then(|w| w.literal_text())
            .as_deref()
            == Some("[")
        {
            if operands
                .last()
                .and_then(|w| w.literal_text())
                .as_deref()
                == Some("]")
            {
                operands.pop();
            } else {
                ctx.warn("test: missing closing ']'");
            }
        }
        let mut parser = PredicateParser {
            operands: &operands,
            pos: 0,
            ctx,
        };
        let expr = parser.parse_or();
        if parser.pos < operands.len() {
            parser
                .ctx
                .warn("test: trailing operands ignored".to_string());
        }
        expr
    }
}

struct PredicateParser<'a, 'c> {
    operands: &'a [Word],
    pos: usize,
    ctx: &'c mut TransformContext,
}

impl PredicateParser<'_, '_> {
    fn peek_text(&self) -> Option<String> {
        self.operands.get(self.pos).and_then(|w| w.literal_text())
    }

    fn parse_or(&mut self) -> String {
        let mut left = self.parse_and();
        while self.peek_text().as_deref() == Some("-o") {
            self.pos += 1;
            let right = self.parse_and();
            left = format!("({} -or {})", left, right);
        }
        left
    }

    fn parse_and(&mut self) -> String {
        let mut left = self.parse_term();
        while self.peek_text().as_deref() == Some("-a") {
            self.pos += 1;
            let right = self.parse_term();
            left = format!("({} -and {})", left, right);
        }
        left
    }

    fn parse_term(&mut self) -> String {
        if self.peek_text().as_deref() == Some("!") {
            self.pos += 1;
            let inner = self.parse_term();
            return format!("(-not {})", inner);
        }

        let first = match self.operands.get(self.pos) {
            Some(w) => w.clone(),
            None => return "$true".to_string(),
        };
        let first_text = first.literal_text().unwrap_or_default();

        // Unary predicates
        if let Some(op) = unary_op(&first_text) {
            self.pos += 1;
            let operand = match self.operands.get(self.pos) {
                Some(w) => {
                    self.pos += 1;
                    self.operand(w)
                }
                None => {
                    self.ctx
                        .warn(format!("test: {} is missing its operand", first_text));
                    return "$false".to_string();
                }
            };
            return emit_unary(op, &operand);
        }

        // Binary comparison?
        if let Some(op_text) = self
            .operands
            .get(self.pos + 1)
            .and_then(|w| w.literal_text())
        {
            if let Some(op) = binary_op(&op_text) {
                let left = self.operand(&first);
                let right = match self.operands.get(self.pos + 2) {
                    Some(w) => self.operand(w),
                    None => {
                        self.ctx
                            .warn(format!("test: {} is missing its right operand", op_text));
                        "''".to_string()
                    }
                };
                self.pos += 3;
                return emit_binary(op, &left, &right);
            }
        }

        // Single operand: true when non-empty
        self.pos += 1;
        let operand = self.operand(&first);
        format!("(-not [string]::IsNullOrEmpty({}))", operand)
    }

    /// Translate an operand word; `$NAME` already became a Variable part in
    /// parsing, so the env mapping falls out of word translation.
    fn operand(&mut self, word: &Word) -> String {
        translate_word(word, self.ctx)
    }
}

#[derive(Clone, Copy)]
enum UnaryOp {
    File,
    Directory,
    Exists,
    NonEmptyFile,
    ZeroLength,
    NonZeroLength,
    Symlink,
}

fn unary_op(text: &str) -> Option<UnaryOp> {
    match text {
        "-f" => Some(UnaryOp::File),
        "-d" => Some(UnaryOp::Directory),
        "-e" => Some(UnaryOp::Exists),
        "-s" => Some(UnaryOp::NonEmptyFile),
        "-z" => Some(UnaryOp::ZeroLength),
        "-n" => Some(UnaryOp::NonZeroLength),
        "-L" | "-h" => Some(UnaryOp::Symlink),
        _ => None,
    }
}

fn emit_unary(op: UnaryOp, operand: &str) -> String {
    match op {
        UnaryOp::File => format!("(Test-Path -PathType Leaf {})", operand),
        UnaryOp::Directory => format!("(Test-Path -PathType Container {})", operand),
        UnaryOp::Exists => format!("(Test-Path {})", operand),
        UnaryOp::NonEmptyFile => format!(
            "((Test-Path {0}) -and ((Get-Item {0}).Length -gt 0))",
            operand
        ),
        UnaryOp::ZeroLength => format!("([string]::IsNullOrEmpty({}))", operand),
        UnaryOp::NonZeroLength => format!("(-not [string]::IsNullOrEmpty({}))", operand),
        UnaryOp::Symlink => format!(
            "((Get-Item {} -Force -ErrorAction SilentlyContinue).LinkType -eq 'SymbolicLink')",
            operand
        ),
    }
}

#[derive(Clone, Copy)]
enum BinaryOp {
    Eq,
    Ne,
    NumEq,
    NumNe,
    Gt,
    Ge,
    Lt,
    Le,
    NewerThan,
    OlderThan,
}

fn binary_op(text: &str) -> Option<BinaryOp> {
    match text {
        "=" | "==" => Some(BinaryOp::Eq),
        "!=" => Some(BinaryOp::Ne),
        "-eq" => Some(BinaryOp::NumEq),
        "-ne" => Some(BinaryOp::NumNe),
        "-gt" => Some(BinaryOp::Gt),
        "-ge" => Some(BinaryOp::Ge),
        "-lt" => Some(BinaryOp::Lt),
        "-le" => Some(BinaryOp::Le),
        "-nt" => Some(BinaryOp::NewerThan),
        "-ot" => Some(BinaryOp::OlderThan),
        _ => None,
    }
}

fn emit_binary(op: BinaryOp, left: &str, right: &str) -> String {
    let ps_op = match op {
        BinaryOp::Eq | BinaryOp::NumEq => "-eq",
        BinaryOp::Ne | BinaryOp::NumNe => "-ne",
        BinaryOp::Gt => "-gt",
        BinaryOp::Ge => "-ge",
        BinaryOp::Lt => "-lt",
        BinaryOp::Le => "-le",
        BinaryOp::NewerThan => {
            return format!(
                "((Get-Item {}).LastWriteTime -gt (Get-Item {}).LastWriteTime)",
                left, right
            )
        }
        BinaryOp::OlderThan => {
            return format!(
                "((Get-Item {}).LastWriteTime -lt (Get-Item {}).LastWriteTime)",
                left, right
            )
        }
    };
    format!("({} {} {})", left, ps_op, right)
}
