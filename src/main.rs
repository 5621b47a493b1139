use std::{fs, io::BufReader, path::PathBuf, process};

use clap::Parser;
use log::debug;
use symeval::Expression;

/// symeval evaluates arithmetic expressions over scalar and array symbols
/// whose values are read from a file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symeval to read the expression from a file instead of the
    /// command line. Only the first line of the file is used.
    #[arg(short, long)]
    file: bool,

    /// File with one symbol per line: `name value` for scalars,
    /// `name length (index,value) ...` for arrays.
    #[arg(short, long, value_name = "PATH")]
    values: Option<PathBuf>,

    /// Prints the scalar and array symbols after their values are loaded.
    #[arg(short = 's', long)]
    print_symbols: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         process::exit(1);
                     });
        script.lines().next().unwrap_or_default().to_string()
    } else {
        args.contents
    };

    debug!("evaluating '{text}'");
    let mut expression = Expression::new(text.trim());

    if let Err(e) = expression.build_symbols() {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Some(path) = &args.values {
        let file = fs::File::open(path).unwrap_or_else(|_| {
                       eprintln!("Failed to open the values file '{}'. Perhaps this file does not exist?",
                                 path.display());
                       process::exit(1);
                   });

        if let Err(e) = expression.load_symbol_values(BufReader::new(file)) {
            for error in e.errors() {
                eprintln!("{error}");
            }
        }
    }

    if args.print_symbols {
        for scalar in expression.scalars() {
            println!("{scalar}");
        }
        for array in expression.arrays() {
            println!("{array}");
        }
    }

    match expression.evaluate() {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
