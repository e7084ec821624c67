//! Line-oriented console over any reader/writer pair.

use std::io::{BufRead, Write};

use crate::error::CliError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is replaced rather than treated as an I/O failure.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), CliError> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Ask until `parse` accepts the (trimmed) answer, printing `error` after
    /// each rejected one. `None` means input ended first.
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        error: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<Option<T>, CliError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(line.trim()) {
                return Ok(Some(value));
            }
            self.say(error)?;
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
