//! Recursive-Descent Parser
//!
//! Token stream → AST. Owns statement-level grammar:
//!
//! ```text
//! script      := list
//! list        := and_or (SEP list)?
//! and_or      := pipeline ((&& | ||) pipeline)*
//! pipeline    := '!'? command ('|' command)*
//! command     := subshell | simple
//! subshell    := '(' list ')' redirect*
//! simple      := assignment* (WORD (WORD | redirect)*)?
//! ```
//!
//! Only structural errors (unmatched parenthesis, missing redirect target)
//! are raised; everything else is best-effort.

use thiserror::Error;

use crate::ast::{
    Assignment, Command, Pipeline, Quoting, Redirect, RedirectOp, Script, SimpleCommand,
    Statement, Subshell, Word, LogicalOp,
};
use crate::parser::lexer::{tokenize, Token, TokenKind};
use crate::parser::word_parser::{parse_word_token, scan_heredoc_body, scan_word_text};

/// Structural parse error
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lex and parse a script
pub fn parse(input: &str) -> Result<Script, ParseError> {
    Parser::new(tokenize(input)).parse_script()
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn kind(&self) -> TokenKind {
        self.current().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.kind() == TokenKind::Eof
    }

    pub fn parse_script(&mut self) -> Result<Script, ParseError> {
        let script = self.parse_list(None)?;
        if !self.at_end() {
            return Err(ParseError::new(format!(
                "unexpected token '{}'",
                self.current().value
            )));
        }
        Ok(script)
    }

    /// Parse statements until EOF or the given closing token
    fn parse_list(&mut self, until: Option<TokenKind>) -> Result<Script, ParseError> {
        let mut statements = Vec::new();
        loop {
            while matches!(self.kind(), TokenKind::Semi | TokenKind::Newline) {
                self.advance();
            }
            if self.at_end() || Some(self.kind()) == until {
                break;
            }
            let mut statement = self.parse_and_or()?;
            if self.kind() == TokenKind::Background {
                self.advance();
                set_background(&mut statement);
            }
            statements.push(statement);
        }
        Ok(Script { statements })
    }

    fn parse_and_or(&mut self) -> Result<Statement, ParseError> {
        let mut left = self.parse_pipeline()?;
        loop {
            let op = match self.kind() {
                TokenKind::And => LogicalOp::And,
                TokenKind::Or => LogicalOp::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_pipeline()?;
            left = Statement::LogicalExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_pipeline(&mut self) -> Result<Statement, ParseError> {
        let mut negated = false;
        if self.current().kind == TokenKind::Word && self.current().value == "!" {
            self.advance();
            negated = true;
        }

        let first = self.parse_command()?;
        let mut commands = vec![first];
        while self.kind() == TokenKind::Pipe {
            self.advance();
            commands.push(self.parse_command()?);
        }

        // A lone run of VAR=value words lifts to an assignment statement
        if !negated && commands.len() == 1 {
            if let Command::Simple(simple) = &commands[0] {
                if simple.name.is_none()
                    && !simple.assignments.is_empty()
                    && simple.redirects.is_empty()
                {
                    return Ok(Statement::Assignments(simple.assignments.clone()));
                }
            }
        }

        Ok(Statement::Pipeline(Pipeline {
            commands,
            negated,
            background: false,
        }))
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        if self.kind() == TokenKind::LeftParen {
            return self.parse_subshell();
        }
        self.parse_simple()
    }

    fn parse_subshell(&mut self) -> Result<Command, ParseError> {
        self.advance(); // (
        let body = self.parse_list(Some(TokenKind::RightParen))?;
        if self.kind() != TokenKind::RightParen {
            return Err(ParseError::new("unmatched '(' in subshell"));
        }
        self.advance();
        let mut redirects = Vec::new();
        while self.is_redirect_token() {
            redirects.push(self.parse_redirect()?);
        }
        Ok(Command::Subshell(Subshell { body, redirects }))
    }

    fn is_redirect_token(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::RedirectOut
                | TokenKind::RedirectAppend
                | TokenKind::RedirectIn
                | TokenKind::HereDoc
                | TokenKind::HereString
        )
    }

    fn parse_simple(&mut self) -> Result<Command, ParseError> {
        let mut simple = SimpleCommand {
            assignments: Vec::new(),
            name: None,
            args: Vec::new(),
            redirects: Vec::new(),
        };
        let mut saw_anything = false;

        loop {
            if self.is_redirect_token() {
                simple.redirects.push(self.parse_redirect()?);
                saw_anything = true;
                continue;
            }
            let token = self.current().clone();
            if !token.is_word() {
                break;
            }
            self.advance();
            saw_anything = true;

            if simple.name.is_none() && token.kind == TokenKind::Word {
                if let Some((name, value)) = split_assignment(&token.value) {
                    simple.assignments.push(Assignment { name, value });
                    continue;
                }
            }
            let word = parse_word_token(&token);
            if simple.name.is_none() {
                simple.name = Some(word);
            } else {
                simple.args.push(word);
            }
        }

        if !saw_anything {
            if self.at_end() {
                return Err(ParseError::new("unexpected end of input"));
            }
            return Err(ParseError::new(format!(
                "unexpected token '{}'",
                self.current().value
            )));
        }
        Ok(Command::Simple(simple))
    }

    fn parse_redirect(&mut self) -> Result<Redirect, ParseError> {
        let token = self.advance();
        let fd = token.fd.unwrap_or(1);
        match token.kind {
            TokenKind::HereDoc => {
                // fd carries the expansion flag: 0 = quoted delimiter
                let target = if token.fd == Some(0) {
                    Word::literal(token.value.clone(), Quoting::Single)
                } else {
                    scan_heredoc_body(&token.value)
                };
                Ok(Redirect {
                    op: RedirectOp::HereDoc,
                    fd: 0,
                    target,
                    target_fd: None,
                })
            }
            TokenKind::RedirectOut if token.target_fd.is_some() => {
                let target_fd = token.target_fd;
                let marker = target_fd.map(|t| format!("&{}", t)).unwrap_or_default();
                Ok(Redirect {
                    op: RedirectOp::Out,
                    fd,
                    target: Word::literal(marker, Quoting::Unquoted),
                    target_fd,
                })
            }
            _ => {
                let op = match token.kind {
                    TokenKind::RedirectOut => RedirectOp::Out,
                    TokenKind::RedirectAppend => RedirectOp::Append,
                    TokenKind::RedirectIn => RedirectOp::In,
                    TokenKind::HereString => RedirectOp::HereString,
                    _ => unreachable!("checked by is_redirect_token"),
                };
                if !self.current().is_word() {
                    return Err(ParseError::new(format!(
                        "missing target for redirect '{}'",
                        token.value
                    )));
                }
                let target_token = self.advance();
                Ok(Redirect {
                    op,
                    fd,
                    target: parse_word_token(&target_token),
                    target_fd: None,
                })
            }
        }
    }
}

/// Apply a trailing `&` to the statement's rightmost pipeline
fn set_background(statement: &mut Statement) {
    match statement {
        Statement::Pipeline(p) => p.background = true,
        Statement::LogicalExpr { right, .. } => set_background(right),
        Statement::Assignments(_) => {}
    }
}

/// Recognize VAR=value in a raw word payload. Returns the name and the
/// parsed value word.
fn split_assignment(raw: &str) -> Option<(String, Word)> {
    let eq = raw.find('=')?;
    let name = &raw[..eq];
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let value = scan_word_text(&raw[eq + 1..]);
    Some((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::WordPart;

    fn parse_one(input: &str) -> Statement {
        let script = parse(input).unwrap();
        assert_eq!(script.statements.len(), 1, "expected one statement");
        script.statements.into_iter().next().unwrap()
    }

    fn as_simple(statement: &Statement) -> &SimpleCommand {
        match statement {
            Statement::Pipeline(p) => match &p.commands[0] {
                Command::Simple(s) => s,
                _ => panic!("expected simple command"),
            },
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_simple_command() {
        let statement = parse_one("echo hello world");
        let simple = as_simple(&statement);
        assert_eq!(simple.name.as_ref().unwrap().literal_text().unwrap(), "echo");
        assert_eq!(simple.args.len(), 2);
    }

    #[test]
    fn test_pipeline() {
        let statement = parse_one("cat f | grep x | wc -l");
        match statement {
            Statement::Pipeline(p) => assert_eq!(p.commands.len(), 3),
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_negated_pipeline() {
        let statement = parse_one("! grep -q x f");
        match statement {
            Statement::Pipeline(p) => assert!(p.negated),
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_logical_chain() {
        let statement = parse_one("cd frontend && npm install");
        match statement {
            Statement::LogicalExpr { op, .. } => assert_eq!(op, LogicalOp::And),
            _ => panic!("expected logical expression"),
        }
    }

    #[test]
    fn test_left_associative_chain() {
        let statement = parse_one("a && b || c");
        match statement {
            Statement::LogicalExpr { op, left, .. } => {
                assert_eq!(op, LogicalOp::Or);
                assert!(matches!(*left, Statement::LogicalExpr { .. }));
            }
            _ => panic!("expected logical expression"),
        }
    }

    #[test]
    fn test_semicolon_separates_statements() {
        let script = parse("a; b; c").unwrap();
        assert_eq!(script.statements.len(), 3);
    }

    #[test]
    fn test_newline_separates_statements() {
        let script = parse("a\nb").unwrap();
        assert_eq!(script.statements.len(), 2);
    }

    #[test]
    fn test_background() {
        let statement = parse_one("node server.js &");
        match statement {
            Statement::Pipeline(p) => assert!(p.background),
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_bare_assignment_lifts() {
        let statement = parse_one("FOO=bar");
        match statement {
            Statement::Assignments(a) => {
                assert_eq!(a.len(), 1);
                assert_eq!(a[0].name, "FOO");
            }
            _ => panic!("expected assignments"),
        }
    }

    #[test]
    fn test_inline_assignment() {
        let statement = parse_one("NODE_ENV=production npm run build");
        let simple = as_simple(&statement);
        assert_eq!(simple.assignments.len(), 1);
        assert_eq!(simple.assignments[0].name, "NODE_ENV");
        assert_eq!(simple.name.as_ref().unwrap().literal_text().unwrap(), "npm");
    }

    #[test]
    fn test_assignment_with_quoted_value() {
        let statement = parse_one(r#"MSG="hello world""#);
        match statement {
            Statement::Assignments(a) => {
                assert_eq!(a[0].value.literal_text().unwrap(), "hello world");
            }
            _ => panic!("expected assignments"),
        }
    }

    #[test]
    fn test_redirects_interleave_with_args() {
        let statement = parse_one("cmd a > out.txt b");
        let simple = as_simple(&statement);
        assert_eq!(simple.args.len(), 2);
        assert_eq!(simple.redirects.len(), 1);
        assert_eq!(simple.redirects[0].op, RedirectOp::Out);
        assert_eq!(simple.redirects[0].fd, 1);
    }

    #[test]
    fn test_fd_to_fd_redirect() {
        let statement = parse_one("cmd 2>&1");
        let simple = as_simple(&statement);
        let redirect = &simple.redirects[0];
        assert_eq!(redirect.fd, 2);
        assert_eq!(redirect.target_fd, Some(1));
        assert_eq!(redirect.target.literal_text().unwrap(), "&1");
    }

    #[test]
    fn test_heredoc_quoted_is_single_literal() {
        let statement = parse_one("cat <<'EOF'\n$not_expanded\nEOF\n");
        let simple = as_simple(&statement);
        let redirect = &simple.redirects[0];
        assert_eq!(redirect.op, RedirectOp::HereDoc);
        assert_eq!(redirect.fd, 0);
        assert_eq!(
            redirect.target.parts,
            vec![WordPart::Literal {
                value: "$not_expanded".into(),
                quoting: Quoting::Single
            }]
        );
    }

    #[test]
    fn test_heredoc_unquoted_expands() {
        let statement = parse_one("cat <<EOF\nhome: $HOME\nEOF\n");
        let simple = as_simple(&statement);
        let redirect = &simple.redirects[0];
        assert!(redirect
            .target
            .parts
            .iter()
            .any(|p| matches!(p, WordPart::Variable { name, .. } if name == "HOME")));
    }

    #[test]
    fn test_subshell() {
        let statement = parse_one("(cd /tmp && ls)");
        match statement {
            Statement::Pipeline(p) => match &p.commands[0] {
                Command::Subshell(s) => assert_eq!(s.body.statements.len(), 1),
                _ => panic!("expected subshell"),
            },
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_unmatched_paren_errors() {
        assert!(parse("(echo hi").is_err());
        assert!(parse("echo hi)").is_err());
    }

    #[test]
    fn test_missing_redirect_target_errors() {
        assert!(parse("echo >").is_err());
    }

    #[test]
    fn test_empty_input() {
        let script = parse("").unwrap();
        assert!(script.statements.is_empty());
    }
}
