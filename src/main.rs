//! Dump the token stream for an f-script source.
//!
//! Reads the script named by the first argument, or standard input when no
//! argument is given, and prints one token per line in the form
//! `kind value`.
//!
//! ```ignore
//! <input.fs fscript
//! ```

use std::io;

fn main() -> io::Result<()> {
    let source = match std::env::args().nth(1) {
        Some(path) => fscript::script::from_path(path)?,
        None => fscript::script::from_reader(&mut io::stdin().lock())?,
    };

    for token in fscript::lex(&source) {
        println!("{}", token);
    }
    Ok(())
}
