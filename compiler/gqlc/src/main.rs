//! GQLC CLI
//!
//! Decode GraphQL string-literal bodies from the command line.

use gqlc::commands::{check_file, run_decode, EXIT_INVALID};

fn main() {
    gqlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "decode" => {
            if args.len() < 3 {
                eprintln!("Usage: gqlc decode <raw>...");
                eprintln!();
                eprintln!("Each argument is the content of a string literal without its quotes.");
                std::process::exit(EXIT_INVALID);
            }
            std::process::exit(run_decode(&args[2..]));
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: gqlc check <file>");
                std::process::exit(EXIT_INVALID);
            };
            std::process::exit(check_file(path));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("gqlc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_INVALID);
        }
    }
}

fn print_usage() {
    println!("GQLC (GraphQL string-literal decoder)");
    println!();
    println!("Usage: gqlc <command> [options]");
    println!();
    println!("Commands:");
    println!("  decode <raw>...   Decode literal bodies given as arguments");
    println!("  check <file>      Decode every line of a file as a literal body");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Enable tracing output (e.g. RUST_LOG=gql_lexer=debug)");
}
