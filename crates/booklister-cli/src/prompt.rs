/// Interactive prompts.
///
/// Generic over the reader and writer so the question/answer loops can be
/// driven from memory in tests.
use anyhow::{bail, Result};
use booklister_core::config::parse_roots;
use booklister_core::export::base_stem;
use booklister_core::NamingPolicy;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const ROOTS_PROMPT: &str = "Enter the full paths to the directories, separated by '|': ";
pub const RANDOM_PROMPT: &str = "Do you want random file names for the output CSVs? (yes/no): ";
pub const BASE_PROMPT: &str = "Enter the base file name for the output CSVs: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line, without its line ending.
    ///
    /// End of input is an error: there is nobody left to answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for an answer to: {}", question.trim_end());
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Ask for the pipe-delimited root list until at least one path is given.
    pub fn read_roots(&mut self) -> Result<Vec<PathBuf>> {
        loop {
            let roots = parse_roots(&self.ask(ROOTS_PROMPT)?);
            if !roots.is_empty() {
                return Ok(roots);
            }
            writeln!(self.output, "Please enter at least one directory.")?;
        }
    }

    /// Ask until the answer is `yes` or `no` (any case, surrounding spaces ignored).
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question)?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer 'yes' or 'no'.")?,
            }
        }
    }

    /// Ask whether names should be random and, if not, for the base name.
    pub fn read_naming(&mut self) -> Result<NamingPolicy> {
        if self.ask_yes_no(RANDOM_PROMPT)? {
            return Ok(NamingPolicy::Random);
        }
        loop {
            let base = self.ask(BASE_PROMPT)?;
            if !base_stem(&base).is_empty() {
                return Ok(NamingPolicy::FixedBase(base.trim().to_string()));
            }
            writeln!(self.output, "The base file name cannot be empty.")?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
