use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use huffman::session::{Request, Session};
use huffman::Error;

/// Build a Huffman code from a text file, then encode words and decode
/// bit strings against it interactively.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Text file to build the code from
    input: PathBuf,

    /// File the session report is written to on exit
    #[arg(short, long, default_value = "huffman-report.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let text = fs::read(&cli.input)?;
    let mut session = Session::new(&text)?;

    println!("commands: encode <word> | decode <bits> | exit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        // End of input ends the session the same way an exit request does.
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Request::parse(&line) {
            Ok(Request::Encode(word)) => match session.encode_word(&word) {
                Ok(bits) => println!("{bits}"),
                Err(e) => println!("{e}"),
            },
            Ok(Request::Decode(bits)) => match session.decode_bits(&bits) {
                Ok(text) => println!("{text}"),
                Err(e) => println!("{e}"),
            },
            Ok(Request::Exit) => break,
            Err(e) => println!("{e}"),
        }
    }

    // Best effort: a session whose report cannot be written still ends
    // cleanly.
    match fs::write(&cli.output, session.report()) {
        Ok(()) => println!("report saved to {}", cli.output.display()),
        Err(e) => log::warn!("could not write report to {}: {e}", cli.output.display()),
    }

    Ok(())
}
