//! Line-mode interactive menu.
//!
//! Generic over the reader and writer so the whole dialogue can be driven
//! from memory in tests.

use crate::render::{self, OutputFormat};
use data_loader::Gender;
use query::QueryEngine;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const MAIN_MENU: &str = "\
======================================================================
\tEnter 1 to Search for a Movie Title and See its Cast
\tEnter 2 to Search for an Actor/Actress and See their Movies
\tEnter anything else to exit.
======================================================================
Please type an option from the list above:
>>> ";

const TITLE_PROMPT: &str = "Type a movie title: ";
const RESTRICT_PROMPT: &str = "Do you want gender restriction ? (yes/no): ";
const GENDER_PROMPT: &str = "Type of gender restriction ? (male/female): ";
const ACTOR_PROMPT: &str = "Type an actor or actress name: ";

pub struct Menu<'a, R, W> {
    engine: QueryEngine<'a>,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: QueryEngine<'a>, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            engine,
            input,
            output,
            format,
        }
    }

    /// Serve queries until an unknown action or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(action) = self.prompt(MAIN_MENU)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match action.as_str() {
                "1" => self.search_for_title()?,
                "2" => self.movies_for_actor()?,
                _ => {
                    writeln!(self.output, "\"{}\" is not a valid action. Goodbye!", action)?;
                    return Ok(());
                }
            }
        }
    }

    fn search_for_title(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt(TITLE_PROMPT)? else {
            return Ok(());
        };
        let Some(restrict) = self.prompt(RESTRICT_PROMPT)? else {
            return Ok(());
        };

        let mut gender = None;
        if restrict == "yes" {
            let Some(raw) = self.prompt(GENDER_PROMPT)? else {
                return Ok(());
            };
            match raw.parse::<Gender>() {
                Ok(g) => gender = Some(g),
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    return Ok(());
                }
            }
        }

        match self.engine.lookup_title(&title, gender) {
            Ok(result) => render::write_title(&mut self.output, &result, self.format),
            Err(e) => render::write_error(&mut self.output, &e, self.format),
        }
    }

    fn movies_for_actor(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt(ACTOR_PROMPT)? else {
            return Ok(());
        };

        match self.engine.lookup_actor(&name) {
            Ok(result) => render::write_actor(&mut self.output, &result, self.format),
            Err(e) => render::write_error(&mut self.output, &e, self.format),
        }
    }

    /// Print `text` and read one line with its line ending removed.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(trimmed.to_string()))
    }
}
