extern crate ansi_term;
extern crate ctrlc;

use ansi_term::Style;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tinybasic::lang::{Error, Lexer, SourceCursor, Token};
use tinybasic::mach::{Config, Interpreter};

const EXTENSION: &str = "bas";

fn usage() -> String {
    format!(
        "tinybasic {}\nUsage: tinybasic [-tokens] program.{}\n",
        env!("CARGO_PKG_VERSION"),
        EXTENSION
    )
}

fn valid_extension(filename: &str) -> bool {
    Path::new(filename).extension().and_then(|ext| ext.to_str()) == Some(EXTENSION)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (tokens_mode, filename) = match args.as_slice() {
        [] => {
            print!("{}", usage());
            return;
        }
        [flag, file] if flag == "-tokens" => (true, file),
        [file] => (false, file),
        _ => {
            print!("{}", usage());
            std::process::exit(1);
        }
    };
    if !valid_extension(filename) {
        eprintln!("Invalid file extension. Expected a .{} file.", EXTENSION);
        std::process::exit(1);
    }
    let path = Path::new(filename);
    let result = if tokens_mode {
        dump_tokens(path)
    } else {
        execute(path)
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

/// Print one token name per token instead of executing, with a line
/// break after each end-of-line token.
fn dump_tokens(path: &Path) -> Result<(), Error> {
    let mut lexer = Lexer::new(SourceCursor::from_path(path)?);
    loop {
        print!("{} ", lexer.current().name());
        if *lexer.current() == Token::Eol {
            println!();
        }
        lexer.advance();
        if lexer.finished() {
            break;
        }
    }
    Ok(())
}

fn execute(path: &Path) -> Result<(), Error> {
    let mut interpreter = Interpreter::from_path(path, Config::default())?;
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    interpreter.set_interrupt(interrupted);
    interpreter.run()
}
