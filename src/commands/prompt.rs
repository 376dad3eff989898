//! Line-oriented prompting shared by the text-mode commands

use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line from `input`
///
/// # Errors
///
/// Returns an error on I/O failure or when the input is closed, so a prompt
/// loop never spins on EOF.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input closed");
    }

    Ok(line.trim().to_string())
}

/// Any answer containing a 'y' counts as yes
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.to_lowercase().contains('y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_trims() {
        let mut input = Cursor::new("  42  \nnext\n");
        assert_eq!(read_line(&mut input, "> ").unwrap(), "42");
        assert_eq!(read_line(&mut input, "> ").unwrap(), "next");
    }

    #[test]
    fn read_line_fails_on_eof() {
        let mut input = Cursor::new("");
        assert!(read_line(&mut input, "> ").is_err());
    }

    #[test]
    fn yes_detection() {
        assert!(is_yes("yes"));
        assert!(is_yes("Y"));
        assert!(is_yes("okay"));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
