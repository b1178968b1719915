//! Console implementations of the move-source and render-sink ports

use std::io::{self, BufRead, Write};

use crate::{
    ports::{MoveSource, RenderSink},
    Error, Result,
};

/// Reads moves line by line from standard input.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        ConsoleInput
    }
}

impl MoveSource for ConsoleInput {
    fn read_move(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move from stdin".to_string(),
                source,
            })?;

        if read == 0 {
            return Err(Error::InputExhausted);
        }

        Ok(line.trim().to_string())
    }
}

/// Writes rendered output to standard output.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }
}

impl RenderSink for ConsoleOutput {
    fn render(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|source| Error::Io {
            operation: "write to stdout".to_string(),
            source,
        })
    }
}
