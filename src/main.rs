// Trilang: parse a source file and print its tokens, tree or formatted text

use std::fs;
use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};
use tracing_subscriber::EnvFilter;

use trilang::{FormatOptions, Formatter, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One token per line
    Tokens,
    /// Debug dump of the syntax tree
    Ast,
    /// Canonical source text
    Format,
}

#[derive(ClapParser)]
#[command(name = "trilang")]
#[command(about = "Tokenize, parse and format Trilang source files")]
#[command(version)]
struct Cli {
    /// Source file to read
    file: PathBuf,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Format)]
    emit: Emit,

    /// Spaces per indentation level when formatting
    #[arg(long, default_value_t = FormatOptions::default().indent_width)]
    indent: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", cli.file.display(), e);
            std::process::exit(1);
        }
    };

    if cli.emit == Emit::Tokens {
        match trilang::tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}:{}\t{}", token.location.line, token.location.column, token);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let tree = match parser.parse() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match cli.emit {
        Emit::Ast => println!("{:#?}", tree),
        _ => {
            let options = FormatOptions::default().with_indent_width(cli.indent);
            print!("{}", Formatter::new(options).format(&tree));
        }
    }

    Ok(())
}
