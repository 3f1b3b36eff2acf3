//! Command-line interface for wahy
//!
//! Usage:
//!   wahy run `<path>` [--format `<format>`]  - Interpret a Wahy source file
//!   wahy commands                          - List the command vocabulary

use clap::{Arg, Command};
use wahy::wahy::interpreter::Interpretation;
use wahy::wahy::registry::CommandRegistry;
use wahy::wahy::source::interpret_path;

fn main() {
    let matches = Command::new("wahy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("An interpreter for the Wahy page-description language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Interpret a Wahy source file and emit the resulting HTML")
                .arg(
                    Arg::new("path")
                        .help("Path to the Wahy source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text', 'json', 'yaml')")
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("commands").about("List the Wahy command vocabulary"))
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let path = run_matches.get_one::<String>("path").unwrap();
            let format = run_matches.get_one::<String>("format").unwrap();
            handle_run_command(path, format);
        }
        Some(("commands", _)) => {
            handle_commands_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the run command
fn handle_run_command(path: &str, format: &str) {
    let result = interpret_path(path);

    match format {
        "text" => render_text(&result),
        "json" => {
            let rendered = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        "yaml" => {
            let rendered = serde_yaml::to_string(&result).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            print!("{}", rendered);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }

    if !result.success {
        std::process::exit(1);
    }
}

/// Text rendering: the document itself on success, a readable error otherwise.
fn render_text(result: &Interpretation) {
    if result.success {
        if let Some(html) = &result.html {
            println!("{}", html);
        }
    } else {
        let message = result.error.as_deref().unwrap_or("interpretation failed");
        match result.line_number {
            Some(0) | None => eprintln!("Error: {}", message),
            Some(line) => eprintln!("Error (line {}): {}", line, message),
        }
    }
}

/// Handle the commands command
fn handle_commands_command() {
    println!("Wahy commands:\n");
    for (phrase, description) in CommandRegistry::with_defaults().descriptions() {
        println!("  {}", phrase);
        println!("    {}", description);
    }
}
