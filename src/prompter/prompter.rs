use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{
    CURSOR_BLINKING_BLOCK, CURSOR_HOME, ENTER_ALT_SCREEN, EXIT_ALT_SCREEN, HIDE_CURSOR, SHOW_CURSOR,
};
use std::io::{self, BufRead, Write};
use strum_macros::Display;

/// Words that end the session from any flow.
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

/// Why a session stopped reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionEnd {
    #[strum(to_string = "exit word")]
    ExitWord,
    #[strum(to_string = "end of input")]
    EndOfInput,
    #[strum(to_string = "flow finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Non-blank lines handed to the flow.
    pub commands: usize,
}

/// Drives a [`Flow`] with lines from a reader. Cursor and alternate-screen
/// codes go to the terminal writer; the flow draws on its own.
#[derive(Debug, Default, Clone)]
pub struct Prompter {
    alt_screen: bool,
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alt_screen(mut self, enabled: bool) -> Self {
        self.alt_screen = enabled;
        self
    }

    pub fn is_exit(line: &str) -> bool {
        EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w))
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<SessionSummary> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with_io(flow, stdin.lock(), &mut stdout)
    }

    pub fn run_with_io<F, R, W>(
        &self,
        mut flow: F,
        reader: R,
        term: &mut W,
    ) -> Result<SessionSummary>
    where
        F: Flow,
        R: BufRead,
        W: Write,
    {
        if self.alt_screen {
            emit(term, &format!("{ENTER_ALT_SCREEN}{CURSOR_HOME}"));
        }
        let outcome = Self::drive(&mut flow, reader, term);
        if self.alt_screen {
            emit(term, &format!("{SHOW_CURSOR}{EXIT_ALT_SCREEN}"));
        }
        outcome
    }

    fn drive<F, R, W>(flow: &mut F, mut reader: R, term: &mut W) -> Result<SessionSummary>
    where
        F: Flow,
        R: BufRead,
        W: Write,
    {
        let mut commands = 0;

        loop {
            emit(term, HIDE_CURSOR);
            flow.render()?;
            emit(term, &format!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}"));

            let mut line = String::new();
            if reader.read_line(&mut line).map_err(Error::Io)? == 0 {
                return Ok(SessionSummary {
                    end: SessionEnd::EndOfInput,
                    commands,
                });
            }
            let line = line.trim();
            if Self::is_exit(line) {
                return Ok(SessionSummary {
                    end: SessionEnd::ExitWord,
                    commands,
                });
            }
            if !line.is_empty() {
                commands += 1;
            }

            if let FlowCtrl::Finish = flow.handle_input(line)? {
                return Ok(SessionSummary {
                    end: SessionEnd::Finished,
                    commands,
                });
            }
        }
    }
}

fn emit<W: Write>(term: &mut W, codes: &str) {
    let _ = term.write_all(codes.as_bytes());
    let _ = term.flush();
}
