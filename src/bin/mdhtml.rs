//! Command-line interface for mdhtml
//! Converts markdown files (or stdin) to HTML, plain text or a token dump.
//!
//! Usage:
//!   mdhtml [`<path>`] [--config `<file>`] [--format `<format>`]  - Convert a file ("-" or none reads stdin)
//!   mdhtml --list-formats                                   - List all available formats

use clap::{Arg, ArgAction, Command};
use mdhtml::{ConverterRegistry, Loader, Md, MdConfig, MdError};
use std::io::Read;

/// Format handled by the CLI itself rather than a converter.
const TOKEN_JSON: &str = "token-json";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("mdhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown emphasis and headers to HTML")
        .arg(
            Arg::new("path")
                .help("Path to the markdown file (reads stdin when omitted or '-')")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'html', 'text', 'token-json'); defaults to the configured one"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let path = matches.get_one::<String>("path").map(String::as_str);
    let format = matches.get_one::<String>("format").map(String::as_str);
    handle_convert_command(config, path, format);
}

fn load_config(path: Option<&String>) -> Result<MdConfig, MdError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

fn read_source(path: Option<&str>) -> String {
    let result = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
        Some(path) => std::fs::read_to_string(path),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(mut config: MdConfig, path: Option<&str>, format: Option<&str>) {
    let dump_tokens = format == Some(TOKEN_JSON);
    if let Some(format) = format.filter(|_| !dump_tokens) {
        config.render.format = format.to_string();
    }

    let md = Md::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in available_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    let source = read_source(path);
    log::debug!("read {} bytes of input", source.len());

    let output = if dump_tokens {
        serde_json::to_string_pretty(&md.inspect(&source)).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        })
    } else {
        md.render(&source)
    };

    if output.is_empty() {
        return;
    }
    println!("{}", output);
}

fn available_formats() -> Vec<String> {
    let mut names = ConverterRegistry::with_defaults().list_converters();
    names.push(TOKEN_JSON.to_string());
    names
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = ConverterRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_converters() {
        if let Ok(converter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", converter.description());
            println!();
        }
    }
    println!("  {}", TOKEN_JSON);
    println!("    Per-line token streams with pairs, as JSON");
}
