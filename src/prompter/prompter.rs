use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

/// Read-eval loop: render the flow, read a line, hand it over, repeat until
/// the flow finishes, the input ends or the user types `exit`.
#[derive(Debug, Default, Clone)]
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }

    /// Cursor sequences are only written when stdout is a terminal.
    fn cursor(&self, sequence: &str) {
        if self.interactive {
            print!("{sequence}");
            let _ = io::stdout().flush();
        }
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let reader = BufReader::new(io::stdin());
        self.run_with_reader(flow, reader)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            self.cursor(HIDE_CURSOR);
            flow.render()?;
            self.cursor(SHOW_CURSOR);

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = line.trim();

            if line.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish | FlowCtrl::Abort => return Ok(()),
            }
        }
    }
}
