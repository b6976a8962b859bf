use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking source of user input, one line per prompt.
pub trait LineReader {
    /// Show `prompt` and wait for one line of input.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        StdinReader
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        read_lossy_line(&mut io::stdin().lock())
    }
}

/// Read one line, replacing invalid UTF-8 with U+FFFD instead of failing.
fn read_lossy_line<B: BufRead>(reader: &mut B) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf).into_owned();
    Ok(Some(strip_line_ending(line)))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Replays a fixed list of answers. Prompts are discarded.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
