//! Text and JSON rendering of lookup results.

use query::{ActorResult, QueryError, TitleResult};
use std::io::{self, Write};

/// Output style for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn write_title<W: Write>(out: &mut W, result: &TitleResult, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Text => {
            writeln!(out, "\"{}\" was released in {}", result.display_title, result.year)?;
            for member in &result.members {
                writeln!(out, "{} played the character \"{}\"", member.name, member.character)?;
            }
            Ok(())
        }
    }
}

pub fn write_actor<W: Write>(out: &mut W, result: &ActorResult, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Text => {
            for appearance in result.appearances {
                writeln!(
                    out,
                    "Played \"{}\" in {} ({})",
                    appearance.character, appearance.title, appearance.year
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_error<W: Write>(out: &mut W, err: &QueryError, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let QueryError::NotFound { query } = err;
            write_json(out, &serde_json::json!({ "not_found": query }))
        }
        OutputFormat::Text => writeln!(out, "{}", err),
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Group the integer digits in threes: `1234567` -> `"1,234,567"`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Two decimal places with grouped integer digits: `1234.5` -> `"1,234.50"`.
/// Only meant for non-negative quantities (seconds, megabytes).
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.max(0.0));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let int_value: usize = int_part.parse().unwrap_or(0);
    format!("{}.{}", format_count(int_value), frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{AppearanceRecord, CastMember};

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(3.14159), "3.14");
        assert_eq!(format_decimal(1234.5), "1,234.50");
    }

    #[test]
    fn test_write_title_text() {
        let bale = CastMember {
            name: "Christian Bale".to_string(),
            gender: "male".to_string(),
            character: "Bruce Wayne".to_string(),
        };
        let result = TitleResult {
            display_title: "Batman Begins",
            year: 2005,
            members: vec![&bale],
        };

        let mut out = Vec::new();
        write_title(&mut out, &result, OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"Batman Begins\" was released in 2005\n\
             Christian Bale played the character \"Bruce Wayne\"\n"
        );
    }

    #[test]
    fn test_write_actor_text() {
        let appearances = vec![AppearanceRecord {
            year: 1975,
            title: "Jaws".to_string(),
            character: "Quint".to_string(),
            actor_name: "Robert Shaw".to_string(),
            gender: "male".to_string(),
        }];
        let result = ActorResult {
            appearances: &appearances,
        };

        let mut out = Vec::new();
        write_actor(&mut out, &result, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Played \"Quint\" in Jaws (1975)\n");
    }

    #[test]
    fn test_write_error_json() {
        let err = QueryError::NotFound {
            query: "Jaws 19".to_string(),
        };

        let mut out = Vec::new();
        write_error(&mut out, &err, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["not_found"], "Jaws 19");
    }
}
