use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::data::IdeologyEntry;
use crate::registry::IdeologyRegistry;

pub const MENU_HEADER: &str = "The time has come for you to commit to an ideology. Choose wisely:";
pub const INVALID_SELECTION: &str = "Something went wrong with your input, try again.";
pub const ACCEPT_PROMPT: &str = "Do you accept this ideology? (yes/no)";
pub const ACCEPTED: &str = "You have accepted the ideology.";
pub const REJOICE: &str = "The citizens rejoice... or start panicking. It's hard to tell.";
pub const CONTINUE_PROMPT: &str = "Would you like to choose another ideology? (yes/no)";
pub const FAREWELL: &str =
    "You walk away firmly committed to your newfound beliefs... until tomorrow.";

const AFFIRMATIVE: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user answered anything but "yes" when asked to continue.
    Declined,
    /// Input ran out (or could not be read) before the user declined.
    InputExhausted,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write to output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selection {input:?}")]
pub struct InvalidSelection {
    pub input: String,
}

/// Trimmed, case-insensitive exact match against "yes". Nothing else counts.
pub fn is_affirmative(raw: &str) -> bool {
    raw.trim().to_lowercase() == AFFIRMATIVE
}

/// Resolves a raw selection line to its catalog entry. Anything that is not a
/// non-negative integer naming a listed position is rejected.
pub fn parse_selection<'a>(
    raw: &str,
    registry: &'a IdeologyRegistry,
) -> Result<&'a IdeologyEntry, InvalidSelection> {
    let invalid = || InvalidSelection {
        input: raw.to_string(),
    };
    let value = raw.trim().parse::<i64>().map_err(|_| invalid())?;
    let index = usize::try_from(value).map_err(|_| invalid())?;
    registry.resolve(index).map_err(|_| invalid())
}

enum Step<'a> {
    Prompt,
    Describe(&'a IdeologyEntry),
    Accept(&'a IdeologyEntry),
    Continue,
}

/// One interactive run of the selection menu over arbitrary line input.
pub struct Session<'a, R, W> {
    registry: &'a IdeologyRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a IdeologyRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        log::info!("session started with {} ideologies", self.registry.len());
        let mut step = Step::Prompt;
        loop {
            step = match step {
                Step::Prompt => {
                    self.print_menu()?;
                    let Some(line) = self.read_line()? else {
                        return Ok(self.exhausted());
                    };
                    match self.select(&line) {
                        Ok(entry) => Step::Describe(entry),
                        Err(err) => {
                            log::debug!("{}", err);
                            writeln!(self.output, "{}", INVALID_SELECTION)?;
                            Step::Prompt
                        }
                    }
                }
                Step::Describe(entry) => {
                    writeln!(self.output, "{}", entry.description)?;
                    writeln!(self.output, "{}", ACCEPT_PROMPT)?;
                    Step::Accept(entry)
                }
                Step::Accept(entry) => {
                    let Some(line) = self.read_line()? else {
                        return Ok(self.exhausted());
                    };
                    if is_affirmative(&line) {
                        log::debug!("accepted {}", entry.name);
                        writeln!(self.output, "{}", ACCEPTED)?;
                        writeln!(self.output, "{}", entry.action_text)?;
                        writeln!(self.output, "{}", REJOICE)?;
                    } else {
                        log::debug!("declined {}", entry.name);
                    }
                    Step::Continue
                }
                Step::Continue => {
                    writeln!(self.output, "{}", CONTINUE_PROMPT)?;
                    let Some(line) = self.read_line()? else {
                        return Ok(self.exhausted());
                    };
                    if !is_affirmative(&line) {
                        writeln!(self.output, "{}", FAREWELL)?;
                        self.output.flush()?;
                        log::info!("session ended: user declined to continue");
                        return Ok(SessionEnd::Declined);
                    }
                    log::debug!("user chose another round");
                    Step::Prompt
                }
            };
        }
    }

    fn select(&self, raw: &str) -> Result<&'a IdeologyEntry, InvalidSelection> {
        let entry = parse_selection(raw, self.registry)?;
        log::debug!("selection {:?} resolved to {}", raw.trim(), entry.name);
        Ok(entry)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", MENU_HEADER)?;
        for (index, name) in self.registry.list_entries() {
            writeln!(self.output, "{}: {}", index, name)?;
        }
        writeln!(
            self.output,
            "Please enter a number between 0 and {} to continue:",
            self.registry.len().saturating_sub(1)
        )
    }

    /// `None` once input is exhausted. Read failures count as exhaustion; bytes
    /// that are not UTF-8 are replaced and handled like any other bad answer.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
            Err(err) => {
                log::warn!("failed to read input: {}", err);
                Ok(None)
            }
        }
    }

    fn exhausted(&self) -> SessionEnd {
        log::info!("session ended: input exhausted");
        SessionEnd::InputExhausted
    }
}
