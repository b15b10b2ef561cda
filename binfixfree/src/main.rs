//! Fixed-to-free conversion command-line tool.
//!
//! Usage: fixfree [OPTIONS] [FILE]
//!
//! Options:
//!   -l, --line <N>       1-based line of the fixed-format spec to convert
//!                        (default: the first convertible line)
//!   -c, --column <N>     1-based column where free-form output starts
//!                        [default: 1]
//!   -b, --block          Print only the generated free-form block
//!   -o, --output <FILE>  Write the updated document to the specified file
//!   -w, --write          Write the updated document back to the input file
//!   -h, --help           Print help
//!   -V, --version        Print version
//!
//! Reads from stdin when no file is given. The conversion is additive:
//! the generated block is inserted after the converted lines and the
//! original fixed-format lines are kept for review.

use libfixfree::{available, classify, convert_current_line, BufferDocument, Options, SpecTag};
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut line_arg: Option<usize> = None;
    let mut column_arg: Option<usize> = None;
    let mut block_only = false;
    let mut output_file: Option<&str> = None;
    let mut write_back = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("fixfree {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-l" | "--line" => {
                i += 1;
                line_arg = Some(parse_number(&args, i, "-l"));
            }
            "-c" | "--column" => {
                i += 1;
                column_arg = Some(parse_number(&args, i, "-c"));
            }
            "-b" | "--block" => {
                block_only = true;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "-w" | "--write" => {
                write_back = true;
            }
            "-" => {
                // explicit stdin; input_path stays None
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input files not supported");
                    process::exit(1);
                }
                input_path = Some(arg);
            }
        }
        i += 1;
    }

    if write_back && input_path.is_none() {
        eprintln!("Error: Cannot write back when reading from stdin");
        process::exit(1);
    }

    let source = match read_input(input_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let mut doc = BufferDocument::from_text(&source);

    let index = match line_arg {
        Some(0) => {
            eprintln!("Error: Line numbers start at 1");
            process::exit(1);
        }
        Some(n) => n - 1,
        None => match first_convertible_line(&doc) {
            Some(index) => index,
            None => {
                eprintln!("Error: No convertible specification found");
                process::exit(1);
            }
        },
    };
    if index >= doc.lines().len() {
        eprintln!("Error: Line {} is past the end of the input", index + 1);
        process::exit(1);
    }

    doc.go_to(index);
    if !available(&doc) {
        eprintln!("Error: Conversion is not available for line {}", index + 1);
        process::exit(1);
    }

    let options = Options {
        start_column: column_arg.unwrap_or(1),
    };
    let conversion = match convert_current_line(&mut doc, &options) {
        Ok(conversion) => conversion,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let output = if block_only {
        conversion.lines.join("\n")
    } else {
        doc.text()
    };

    let destination = if write_back { input_path } else { output_file };
    match destination {
        Some(path) => {
            if let Err(err) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

fn first_convertible_line(doc: &BufferDocument) -> Option<usize> {
    // line 0 is never current for a conversion, so start below it
    (1..doc.lines().len()).find(|&i| {
        matches!(
            classify(&doc.lines()[i]),
            SpecTag::Header | SpecTag::Declaration | SpecTag::Procedure
        )
    })
}

fn parse_number(args: &[String], i: usize, flag: &str) -> usize {
    if i >= args.len() {
        eprintln!("Error: {} requires a number argument", flag);
        process::exit(1);
    }
    match args[i].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} requires a number, got {:?}", flag, args[i]);
            process::exit(1);
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_help() {
    println!("fixfree - convert fixed-format RPG declarations to free-form");
    println!();
    println!("Usage: fixfree [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -l, --line <N>       1-based line of the spec to convert");
    println!("                       (default: the first convertible line)");
    println!("  -c, --column <N>     1-based column where free-form output starts [default: 1]");
    println!("  -b, --block          Print only the generated free-form block");
    println!("  -o, --output <FILE>  Write the updated document to the specified file");
    println!("  -w, --write          Write the updated document back to the input file");
    println!("  -h, --help           Print help");
    println!("  -V, --version        Print version");
    println!();
    println!("Reads from stdin when no FILE is given. The generated block is");
    println!("inserted after the converted lines; the original fixed-format");
    println!("lines are kept so the conversion can be reviewed.");
}
