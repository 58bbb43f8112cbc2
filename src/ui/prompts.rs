//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! The store never talks to a terminal. It asks a [`Confirm`] capability
//! for a yes/no decision; the CLI passes a [`TerminalConfirm`] and tests
//! pass a closure with a fixed answer.
//!
//! Prompts are only shown in interactive mode. In non-interactive mode a
//! confirmation fails with [`PromptError::NotInteractive`] unless the
//! caller opted in with `--yes`.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(
        "confirmation required but not in interactive mode (use --yes to overwrite, or --interactive to answer from stdin)"
    )]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// A source of yes/no decisions.
pub trait Confirm {
    /// Ask `message`; `Ok(true)` means go ahead.
    fn confirm(&self, message: &str) -> Result<bool, PromptError>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        Ok(self(message))
    }
}

/// Confirmation backed by stdin/stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirm {
    interactive: bool,
    assume_yes: bool,
}

impl TerminalConfirm {
    pub fn new(interactive: bool, assume_yes: bool) -> Self {
        Self {
            interactive,
            assume_yes,
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        if self.assume_yes {
            return Ok(true);
        }
        if !self.interactive {
            return Err(PromptError::NotInteractive);
        }

        let stdin = io::stdin();
        confirm_with(message, &mut stdin.lock(), &mut io::stdout())
    }
}

/// Prompt on `output` and read one answer line from `input`.
///
/// `y` and `yes` (any case) confirm. Anything else, including end of input,
/// declines.
pub fn confirm_with<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, PromptError> {
    write!(output, "{} [y/N] ", message).map_err(|e| PromptError::IoError(e.to_string()))?;
    output
        .flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmed = confirm_with("Overwrite?", &mut input, &mut output).expect("prompt");
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers_confirm() {
        for answer in ["y\n", "Y\n", "yes\n", "YES\n", "  y  \n"] {
            assert!(ask(answer).0, "{answer:?} should confirm");
        }
    }

    #[test]
    fn other_answers_decline() {
        for answer in ["n\n", "no\n", "\n", "yep\n", ""] {
            assert!(!ask(answer).0, "{answer:?} should decline");
        }
    }

    #[test]
    fn prompt_text_is_written() {
        let (_, shown) = ask("n\n");
        assert_eq!(shown, "Overwrite? [y/N] ");
    }

    #[test]
    fn assume_yes_skips_prompt() {
        let confirm = TerminalConfirm::new(false, true);
        assert!(confirm.confirm("Overwrite?").unwrap());
    }

    #[test]
    fn non_interactive_fails() {
        let confirm = TerminalConfirm::new(false, false);
        let err = confirm.confirm("Overwrite?").unwrap_err();
        assert!(matches!(err, PromptError::NotInteractive));
        assert!(err.to_string().contains("--yes"));
        assert!(err.to_string().contains("--interactive"));
    }

    #[test]
    fn closures_are_confirmers() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm("?").unwrap());
        assert!(!no.confirm("?").unwrap());
    }
}
