//! Debug commands: `parse` and `lex` for inspecting front-end output.

use super::read_file;

/// Parse a file and print its syntax tree.
///
/// Syntax errors are listed after whatever was parsed before the first one.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let lexed = mtx_lexer::lex(&content);
    let parsed = mtx_parse::parse(&lexed.tokens);

    let tree = mtx_ir::print_tree(&parsed.program);
    if !tree.is_empty() {
        println!("{tree}");
    }

    let errors: Vec<_> = lexed.errors.iter().chain(&parsed.errors).collect();
    if !errors.is_empty() {
        eprintln!();
        eprintln!("Errors:");
        for error in &errors {
            eprintln!("  {error}");
        }
        std::process::exit(1);
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let lexed = mtx_lexer::lex(&content);

    for token in lexed.tokens.iter().filter(|t| !t.kind.is_eof()) {
        println!("{token}");
    }

    if lexed.has_errors() {
        for error in &lexed.errors {
            eprintln!("{error}");
        }
        std::process::exit(1);
    }
}
