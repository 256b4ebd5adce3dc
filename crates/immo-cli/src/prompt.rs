//! Line-oriented prompt driver for the interactive menu.
//!
//! Generic over its reader and writer so menu flows run against in-memory
//! buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use immo_core::validation::{Optionality, parse_price_range};
use immo_core::{PriceRange, ValidationError};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{line}").context("failed to write to terminal")
    }

    /// Print `label` and read one line, without its line ending.
    ///
    /// End of input is an error: every prompt expects an answer.
    pub fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.output, "{label}").context("failed to write to terminal")?;
        self.output.flush().context("failed to flush terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from terminal")?;
        if read == 0 {
            bail!("entrée terminée pendant la saisie de « {} »", label.trim());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parser` accepts the answer, printing each rejection reason.
    pub fn ask_until_valid<T>(
        &mut self,
        label: &str,
        parser: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> anyhow::Result<T> {
        loop {
            let raw = self.ask(label)?;
            match parser(&raw) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    tracing::debug!(%label, %reason, "input rejected");
                    self.say(reason)?;
                }
            }
        }
    }

    /// Ask for both price bounds, re-asking the pair until it is valid.
    pub fn ask_price_range(&mut self, optionality: Optionality) -> anyhow::Result<PriceRange> {
        loop {
            let min = self.ask("Prix minimum: ")?;
            let max = self.ask("Prix maximum: ")?;
            match parse_price_range(&min, &max, optionality) {
                Ok(range) => return Ok(range),
                Err(reason) => self.say(reason)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use immo_core::validation::{Optionality, parse_positive_int};
    use pretty_assertions::assert_eq;

    use super::Prompter;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).expect("utf-8 output")
    }

    #[test]
    fn retries_until_valid_and_prints_reasons() {
        let mut p = prompter("abc\n-2\n0\n3\n");
        let value = p
            .ask_until_valid("Nombre de chambres: ", |raw| {
                parse_positive_int(raw, Optionality::Required)
            })
            .expect("eventually valid");
        assert_eq!(value, Some(3));

        let out = transcript(p);
        assert_eq!(out.matches("Nombre de chambres: ").count(), 4);
        assert!(out.contains("Valeur invalide. Veuillez saisir un nombre."));
        assert_eq!(out.matches("Veuillez saisir un nombre positif.").count(), 2);
    }

    #[test]
    fn optional_field_accepts_empty_line() {
        let mut p = prompter("\n");
        let value = p
            .ask_until_valid("Nombre de salles de bains: ", |raw| {
                parse_positive_int(raw, Optionality::Optional)
            })
            .expect("empty is fine");
        assert_eq!(value, None);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("abc\n");
        let result = p.ask_until_valid("Prix: ", immo_core::validation::parse_price);
        assert!(result.is_err());
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let mut p = prompter("alice\r\n");
        assert_eq!(p.ask("Nom d'utilisateur: ").expect("line"), "alice");
    }

    #[test]
    fn price_range_is_reasked_as_a_pair() {
        let mut p = prompter("500\n100\n100\n500\n");
        let range = p.ask_price_range(Optionality::Optional).expect("range");
        assert_eq!((range.min(), range.max()), (Some(100), Some(500)));

        let out = transcript(p);
        assert_eq!(out.matches("Prix minimum: ").count(), 2);
        assert!(out.contains("Le prix minimum doit être inférieur ou égal au prix maximum"));
    }

    #[test]
    fn empty_optional_range_is_unbounded() {
        let mut p = prompter("\n\n");
        let range = p.ask_price_range(Optionality::Optional).expect("range");
        assert!(range.is_unbounded());
    }
}
