//! Abstract Syntax Tree (AST) Types for the Agent Bash Dialect
//!
//! This module defines the AST for the subset of POSIX shell that AI coding
//! agents typically emit: pipelines, logical chains, subshells, assignments,
//! redirects, and words built from quoted/unquoted parts and expansions.

// =============================================================================
// SCRIPT & STATEMENTS
// =============================================================================

/// Root node: a complete script
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub statements: Vec<Statement>,
}

/// Logical operator between two statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,  // &&
    Or,   // ||
    Semi, // ;
}

/// A statement: a pipeline, a logical chain, or bare assignments
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Pipeline(Pipeline),
    LogicalExpr {
        op: LogicalOp,
        left: Box<Statement>,
        right: Box<Statement>,
    },
    /// A run of VAR=value words with no command following
    Assignments(Vec<Assignment>),
}

// =============================================================================
// PIPELINES & COMMANDS
// =============================================================================

/// A pipeline: cmd1 | cmd2 | cmd3
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
    /// Negate exit status with !
    pub negated: bool,
    /// Run in background (trailing &)
    pub background: bool,
}

/// Union of command forms
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Simple(SimpleCommand),
    Subshell(Subshell),
}

/// Simple command: assignments, name, args, redirects
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCommand {
    /// Variable assignments before the command: VAR=value cmd
    pub assignments: Vec<Assignment>,
    /// Command name (None for assignment-only commands)
    pub name: Option<Word>,
    pub args: Vec<Word>,
    pub redirects: Vec<Redirect>,
}

/// Subshell: ( body ) with optional redirects
#[derive(Debug, Clone, PartialEq)]
pub struct Subshell {
    pub body: Script,
    pub redirects: Vec<Redirect>,
}

/// Variable assignment: VAR=value
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: Word,
}

// =============================================================================
// REDIRECTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOp {
    Out,        // >
    Append,     // >>
    In,         // <
    HereString, // <<<
    /// << body; kept distinct from In so lowering can tell a heredoc body
    /// apart from a filename target
    HereDoc,
}

/// I/O redirect. `target_fd` present means this is an N>&M redirect and
/// `target` is a synthetic `&M` placeholder word.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub op: RedirectOp,
    pub fd: u8,
    pub target: Word,
    pub target_fd: Option<u8>,
}

impl Redirect {
    pub fn is_input(&self) -> bool {
        matches!(
            self.op,
            RedirectOp::In | RedirectOp::HereString | RedirectOp::HereDoc
        )
    }
}

// =============================================================================
// WORDS
// =============================================================================

/// Quoting context of a literal part. Preserved through translation because
/// it governs which characters must be escaped on emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Unquoted,
    Single,
    Double,
    DollarSingle,
}

/// A word is an ordered sequence of parts
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WordPart {
    Literal {
        value: String,
        quoting: Quoting,
    },
    Variable {
        name: String,
        braced: bool,
    },
    /// $( … ) carrying the raw inner command text; re-lexed/parsed lazily
    /// by the transformer
    CommandSubstitution {
        command: String,
    },
    /// Glob pattern, passed through to PowerShell unchanged
    Glob {
        pattern: String,
    },
}

impl Word {
    pub fn new(parts: Vec<WordPart>) -> Self {
        Self { parts }
    }

    /// A word holding a single literal
    pub fn literal(value: impl Into<String>, quoting: Quoting) -> Self {
        Self {
            parts: vec![WordPart::Literal {
                value: value.into(),
                quoting,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The concatenated text of the word if every part is a literal or glob,
    /// regardless of quoting. None when the word contains expansions.
    pub fn literal_text(&self) -> Option<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                WordPart::Literal { value, .. } => out.push_str(value),
                WordPart::Glob { pattern } => out.push_str(pattern),
                _ => return None,
            }
        }
        Some(out)
    }

    /// The literal text only when the word is a single unquoted literal.
    /// Path and tilde rewrites apply exclusively to such words.
    pub fn unquoted_literal(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [WordPart::Literal {
                value,
                quoting: Quoting::Unquoted,
            }] => Some(value),
            _ => None,
        }
    }

    /// True when any part came from a quoted region
    pub fn has_quoted_part(&self) -> bool {
        self.parts.iter().any(|p| {
            matches!(
                p,
                WordPart::Literal {
                    quoting: Quoting::Single | Quoting::Double | Quoting::DollarSingle,
                    ..
                }
            )
        })
    }
}
