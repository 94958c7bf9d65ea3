use clap::Parser;
use std::io::Read;

use bash2ps::{transpile_with_meta, ToolAvailability, TranspileOptions};

#[derive(Parser)]
#[command(name = "bash2ps")]
#[command(about = "Transpile agent-emitted bash commands to PowerShell")]
#[command(version)]
struct Cli {
    /// Translate the command string given on the command line
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output result as JSON (powershell, warnings, unsupported, usedFallbacks)
    #[arg(long = "json")]
    json: bool,

    /// Always emit PowerShell-only fallbacks, even when rg/fd/curl are on PATH
    #[arg(long = "no-native-tools")]
    no_native_tools: bool,

    /// Assume every native tool is available (skip the PATH probe)
    #[arg(long = "assume-tools")]
    assume_tools: bool,

    /// Script file to translate
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Determine input: -c, file, or stdin
    let bash = if let Some(command) = cli.command {
        command
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: cannot read script file {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() {
            eprintln!("Error: no input. Use -c 'command', provide a file, or pipe via stdin.");
            std::process::exit(1);
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        buf
    };

    let options = TranspileOptions {
        available_tools: if cli.assume_tools {
            Some(ToolAvailability::all())
        } else {
            None
        },
        prefer_native_tools: Some(!cli.no_native_tools),
        ..Default::default()
    };

    let result = transpile_with_meta(&bash, &options);

    if cli.json {
        match serde_json::to_string(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: cannot serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", result.powershell);
        for warning in &result.warnings {
            eprintln!("warning: {}", warning);
        }
    }
}
