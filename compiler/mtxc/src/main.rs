//! The `mtx` command-line interface.

use mtxc::commands::{check_file, explain_error, lex_file, parse_file, run_file, ReportOptions};

fn main() {
    mtxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let options = ReportOptions {
        verbose: args.iter().skip(2).any(|a| a == "--verbose" || a == "-v"),
    };
    let file_arg = args.iter().skip(2).find(|a| !a.starts_with('-'));

    match command.as_str() {
        "run" => {
            let Some(path) = file_arg else {
                eprintln!("Usage: mtx run <file.m> [--verbose]");
                std::process::exit(1);
            };
            run_file(path, options);
        }
        "check" => {
            let Some(path) = file_arg else {
                eprintln!("Usage: mtx check <file.m> [--verbose]");
                std::process::exit(1);
            };
            check_file(path, options);
        }
        "parse" => {
            let Some(path) = file_arg else {
                eprintln!("Usage: mtx parse <file.m>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "lex" => {
            let Some(path) = file_arg else {
                eprintln!("Usage: mtx lex <file.m>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" => {
            println!("mtx {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mtx explain <ERROR_CODE>");
                eprintln!("Example: mtx explain E2003");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // A bare `.m` path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("m"))
            {
                run_file(command, options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("mtx, a matrix scripting language");
    println!();
    println!("Usage: mtx <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.m>         Check and run a program");
    println!("  check <file.m>       Report diagnostics without running");
    println!("  parse <file.m>       Print the syntax tree");
    println!("  lex <file.m>         Print the token stream");
    println!("  explain <code>       Explain an error code (e.g., E2003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --verbose, -v        Show error codes and notes with diagnostics");
    println!();
    println!("Environment:");
    println!("  MTX_LOG              Tracing filter (e.g., debug, mtx_eval=trace)");
    println!("  MTX_LOG_TREE         Render tracing output as an indented tree");
    println!();
    println!("Examples:");
    println!("  mtx run program.m");
    println!("  mtx program.m                   # same as run");
    println!("  mtx check program.m --verbose");
    println!("  mtx explain E2003               # Explain incompatible shapes");
}
