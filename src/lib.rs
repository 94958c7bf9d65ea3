//! bash2ps - Transpile agent-emitted bash to PowerShell
//!
//! A source-to-source transpiler for the POSIX-shell subset that AI coding
//! agents typically emit. Middleware running on Windows hosts feeds each
//! command string through [`transpile`] and executes the returned
//! PowerShell instead of relying on a UNIX-emulation layer.

pub mod ast;
pub mod commands;
pub mod parser;
pub mod tools;
pub mod transform;
pub mod transpiler;

pub use ast::types::*;
pub use parser::{parse, ParseError, Parser};
pub use tools::{detect_tools, reset_tool_cache, ToolAvailability};
pub use transform::PsVersion;
pub use transpiler::{transpile, transpile_with_meta, TranspileOptions, TranspileResult};
