use std::{fs, io};

use apa::get_result;
use clap::Parser;

/// apa is a small, dynamically typed, expression-oriented programming
/// language with Swedish keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells apa to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last
    /// printable value of an apa script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Source text (or a path with --file). Leave it out to start the
    /// interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(e) = apa::repl::start(&mut stdin.lock(), &mut stdout.lock()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
