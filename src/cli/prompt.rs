//! Reading secrets and passphrases from the operator.
//!
//! Interactive reads use a masked prompt so nothing echoes into scrollback;
//! piped input is read verbatim. Values live in [`Zeroizing`] buffers so
//! they are wiped when dropped.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::error::Result;

/// Flag or argument value that means "read from stdin".
pub const STDIN_SENTINEL: &str = "-";

/// Resolve a passphrase flag, reading one line from stdin when it is `-`.
/// A missing flag is an empty passphrase.
pub fn passphrase(flag: Option<String>) -> Result<Zeroizing<String>> {
    match flag {
        Some(value) if value == STDIN_SENTINEL => read_line("passphrase"),
        Some(value) => Ok(Zeroizing::new(value)),
        None => Ok(Zeroizing::new(String::new())),
    }
}

/// Resolve the secret to store. A missing argument or `-` reads stdin;
/// piped input is read to EOF so multi-line payloads survive intact.
pub fn secret(arg: Option<String>) -> Result<Zeroizing<String>> {
    match arg {
        Some(value) if value != STDIN_SENTINEL => Ok(Zeroizing::new(value)),
        _ => read_all("secret"),
    }
}

/// One line: masked prompt on a terminal, a single stdin line otherwise.
fn read_line(prompt: &str) -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        read_masked(prompt)
    } else {
        let mut line = Zeroizing::new(String::new());
        io::stdin().read_line(&mut line)?;
        trim_newline(&mut line);
        Ok(line)
    }
}

/// Full payload: masked prompt on a terminal, stdin to EOF otherwise.
fn read_all(prompt: &str) -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        read_masked(prompt)
    } else {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

fn read_masked(prompt: &str) -> Result<Zeroizing<String>> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}

fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
