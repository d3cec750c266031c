use crate::config::Config;
use crate::error::BecryptError;
use std::io::{self, IsTerminal, Read, Write};

/// bcrypt ignores everything past this many bytes.
pub const MAX_PASSWORD_LEN: usize = 72;

/// Where the password for a run comes from.
pub trait PasswordSource {
    /// `confirm` asks for the password a second time when prompting.
    fn read_password(&mut self, confirm: bool) -> Result<Vec<u8>, BecryptError>;
}

/// Cuts the password to bcrypt's input ceiling; shorter input is left alone.
pub fn truncate(mut password: Vec<u8>) -> Vec<u8> {
    password.truncate(MAX_PASSWORD_LEN);
    password
}

/// Drops exactly one trailing `\n`, if any.
pub fn strip_newline(mut password: Vec<u8>) -> Vec<u8> {
    if password.last() == Some(&b'\n') {
        password.pop();
    }
    password
}

/// Reads a piped password to the end of input.
pub fn read_piped<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(truncate(strip_newline(buf)))
}

/// Masked read from the terminal, with the prompt on stderr.
fn prompt_terminal(label: &str) -> io::Result<Vec<u8>> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", label)?;
    stderr.flush()?;
    let entered = rpassword::read_password()?;
    // Input is not echoed, so the cursor is still on the prompt line.
    write!(stderr, "\r{}\r", " ".repeat(label.len()))?;
    stderr.flush()?;
    Ok(entered.into_bytes())
}

/// Standard input when piped, the terminal otherwise.
pub struct StdPasswordSource {
    confirm_enabled: bool,
    attempts: u32,
}

impl StdPasswordSource {
    pub fn new(config: &Config) -> Self {
        StdPasswordSource {
            confirm_enabled: config.confirm,
            attempts: config.prompt_attempts.max(1),
        }
    }

    /// Prompts through `prompt` until a usable password is entered or the
    /// attempts run out.
    fn read_interactive<F>(&self, confirm: bool, mut prompt: F) -> Result<Vec<u8>, BecryptError>
    where
        F: FnMut(&str) -> io::Result<Vec<u8>>,
    {
        for attempt in 1..=self.attempts {
            let retry = if attempt < self.attempts { ", retry" } else { "" };

            let password = prompt("Enter password: ")?;
            if password.is_empty() {
                eprintln!("Password can't be empty{}", retry);
                log::debug!("Empty password on attempt {}/{}", attempt, self.attempts);
                continue;
            }
            if !(confirm && self.confirm_enabled) {
                return Ok(truncate(password));
            }

            let again = prompt("Confirm password: ")?;
            if password == again {
                return Ok(truncate(password));
            }
            eprintln!("Passwords not the same{}", retry);
            log::debug!(
                "Password confirmation failed on attempt {}/{}",
                attempt,
                self.attempts
            );
        }
        log::warn!("No password entered after {} attempts", self.attempts);
        Err(BecryptError::PasswordMissing)
    }
}

impl PasswordSource for StdPasswordSource {
    fn read_password(&mut self, confirm: bool) -> Result<Vec<u8>, BecryptError> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            self.read_interactive(confirm, prompt_terminal)
        } else {
            log::debug!("Reading password from standard input");
            Ok(read_piped(stdin.lock())?)
        }
    }
}
