//! Logic Bridge CLI - Structured-English pseudocode transpiler

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use logicbridge::errors::{print_error, print_errors};
use logicbridge::service::{self, Status};
use logicbridge::{BridgeError, Language, Lexer, Parser, Preprocessor, Program, analyze};

fn usage() {
    println!("Logic Bridge - Structured-English Pseudocode Transpiler");
    println!("Version {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: logicbridge <command> [options]");
    println!();
    println!("Commands:");
    println!("  normalize <file>       Print the source rewritten into canonical syntax");
    println!("  tokens <file>          Print the token stream");
    println!("  parse <file>           Parse and dump the AST as JSON");
    println!("  check <file>           Parse and check declarations");
    println!("  compile <file> -t <target> [-o <output>]");
    println!("                         Compile to target language");
    println!("  request [<file>]       Answer a JSON compile request from a file or stdin");
    println!();
    println!("Targets: c, cpp (c++), java, python (py), javascript (js)");
    println!();
}

fn read_file(filename: &str) -> Option<String> {
    match fs::read_to_string(filename) {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("Error reading file '{}': {}", filename, e);
            None
        }
    }
}

/// Preprocess, lex and parse, reporting errors against the original source
fn front_end(source: &str, filename: &str) -> Option<Program> {
    let normalized = Preprocessor::new().process(source);
    let tokens = Lexer::new(&normalized).tokenize();
    let output = Parser::new(tokens).parse();

    if !output.errors.is_empty() {
        print_errors(source, filename, &output.errors);
        return None;
    }
    output.program
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    if command == "request" {
        let body = match args.get(2) {
            Some(filename) => match read_file(filename) {
                Some(s) => s,
                None => return ExitCode::FAILURE,
            },
            None => {
                let mut body = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut body) {
                    eprintln!("Error reading stdin: {}", e);
                    return ExitCode::FAILURE;
                }
                body
            }
        };

        let (status, json) = service::compile_json(&body);
        println!("{}", json);
        return match status {
            Status::Ok => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    if !matches!(
        command.as_str(),
        "normalize" | "tokens" | "parse" | "check" | "compile"
    ) {
        eprintln!("Unknown command: {}", command);
        eprintln!("Run 'logicbridge' without arguments for usage information");
        return ExitCode::FAILURE;
    }

    if args.len() < 3 {
        eprintln!("Error: missing file argument");
        return ExitCode::FAILURE;
    }

    let filename = &args[2];

    match command.as_str() {
        "normalize" => {
            let Some(source) = read_file(filename) else {
                return ExitCode::FAILURE;
            };
            println!("{}", Preprocessor::new().process(&source));
            ExitCode::SUCCESS
        }
        "tokens" => {
            let Some(source) = read_file(filename) else {
                return ExitCode::FAILURE;
            };
            let normalized = Preprocessor::new().process(&source);
            for token in Lexer::new(&normalized).tokenize() {
                println!(
                    "{:>4}  {:<10}  {}",
                    token.line,
                    token.kind.category(),
                    token.value()
                );
            }
            ExitCode::SUCCESS
        }
        "parse" => {
            let Some(source) = read_file(filename) else {
                return ExitCode::FAILURE;
            };
            let Some(program) = front_end(&source, filename) else {
                return ExitCode::FAILURE;
            };

            match serde_json::to_string_pretty(&program) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_error(&source, filename, &BridgeError::internal(e.to_string()));
                    ExitCode::FAILURE
                }
            }
        }
        "check" => {
            let Some(source) = read_file(filename) else {
                return ExitCode::FAILURE;
            };
            let Some(program) = front_end(&source, filename) else {
                return ExitCode::FAILURE;
            };

            let analysis = analyze(&program);
            if !analysis.is_ok() {
                print_errors(&source, filename, &analysis.errors);
                return ExitCode::FAILURE;
            }

            println!("OK: {} statements checked successfully", program.body.len());
            if !analysis.symbol_table.is_empty() {
                println!("\nSymbols:");
                for (name, sym) in analysis.symbol_table.iter() {
                    println!("  {}: {} (line {})", name, sym.kind.tag(), sym.line);
                }
            }
            ExitCode::SUCCESS
        }
        "compile" => {
            // Parse arguments
            let mut target = None;
            let mut output = None;
            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "-t" | "--target" => {
                        if i + 1 < args.len() {
                            target = Some(args[i + 1].clone());
                            i += 2;
                        } else {
                            eprintln!("Error: -t requires a target");
                            return ExitCode::FAILURE;
                        }
                    }
                    "-o" | "--output" => {
                        if i + 1 < args.len() {
                            output = Some(args[i + 1].clone());
                            i += 2;
                        } else {
                            eprintln!("Error: -o requires an output path");
                            return ExitCode::FAILURE;
                        }
                    }
                    _ => {
                        eprintln!("Unknown option: {}", args[i]);
                        return ExitCode::FAILURE;
                    }
                }
            }

            let language = match target.as_deref().map(str::parse::<Language>) {
                Some(Ok(language)) => language,
                Some(Err(e)) => {
                    eprintln!("Error: {}", e.message());
                    eprintln!("Available targets: c, cpp, java, python, javascript");
                    return ExitCode::FAILURE;
                }
                None => {
                    eprintln!("Error: -t <target> is required");
                    eprintln!("Available targets: c, cpp, java, python, javascript");
                    return ExitCode::FAILURE;
                }
            };

            let Some(source) = read_file(filename) else {
                return ExitCode::FAILURE;
            };
            let Some(program) = front_end(&source, filename) else {
                return ExitCode::FAILURE;
            };

            let analysis = analyze(&program);
            if !analysis.is_ok() {
                print_errors(&source, filename, &analysis.errors);
                return ExitCode::FAILURE;
            }

            // Generate code
            let mut generator = language.generator();
            let code = match generator.generate(&program) {
                Ok(code) => code,
                Err(e) => {
                    print_error(&source, filename, &e);
                    return ExitCode::FAILURE;
                }
            };

            // Write output
            let output_path = output.unwrap_or_else(|| {
                let stem = std::path::Path::new(filename)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                format!("{}.{}", stem, generator.file_extension())
            });

            match fs::write(&output_path, &code) {
                Ok(_) => {
                    println!(
                        "Generated {}: {} ({} bytes)",
                        generator.language_name(),
                        output_path,
                        code.len()
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_error(&source, filename, &BridgeError::Io(e));
                    ExitCode::FAILURE
                }
            }
        }
        _ => ExitCode::FAILURE,
    }
}
