//! Interactive shell.
//!
//! Prompts for one hash per line and prints a verbose report for each until
//! end of input.

use std::io::{self, BufRead, Write};

use hashhound_core::{Hashhound, RenderConfig};

const PROMPT: &str = "hashhound > ";
const SEPARATOR: &str = "--------------------------";

/// Run the shell on stdin/stdout.
pub fn run_interactive(hound: &Hashhound, config: &RenderConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(hound, config, stdin.lock(), &mut stdout.lock())
}

/// Run the shell over any reader/writer pair.
fn run_session(
    hound: &Hashhound,
    config: &RenderConfig,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF (Ctrl-D): end the prompt line cleanly
            writeln!(out)?;
            return Ok(());
        }

        let hash = line.trim_end_matches(['\r', '\n']);
        if hash.trim().is_empty() {
            continue;
        }

        let result = hound.classify(hash);
        out.write_all(hound.render(&result, config).as_bytes())?;
        writeln!(out, "{}", SEPARATOR)?;
    }
}
