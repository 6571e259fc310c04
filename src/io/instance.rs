//! Line-oriented instance format.
//!
//! ```text
//! <label> <capacity> <label> <reference>
//! <weight> <value>
//! <weight> <value>
//! ...
//! ```
//!
//! The reference (known optimum) is optional: a header with only
//! `<label> <capacity>` is accepted. Blank lines are skipped.

use crate::error::{KnapsackError, Result};
use crate::model::{Item, ItemSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// An item set together with its known optimum, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    pub items: ItemSet,
    /// Known optimal value used as the reference for relative errors.
    pub reference: Option<u64>,
}

impl Instance {
    pub fn new(items: ItemSet, reference: Option<u64>) -> Self {
        Self { items, reference }
    }

    /// Reads an instance file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses an instance from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut header: Option<(i64, Option<i64>)> = None;
        let mut items = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            if header.is_none() {
                header = Some(parse_header(&fields, number)?);
                continue;
            }

            if fields.len() != 2 {
                return Err(parse_error(
                    number,
                    format!("expected `<weight> <value>`, found {} fields", fields.len()),
                ));
            }
            let weight = parse_number(fields[0], "weight", number)?;
            let value = parse_number(fields[1], "value", number)?;
            items.push(Item::try_from_signed(value, weight).map_err(|e| at_line(e, number))?);
        }

        let (capacity, reference) =
            header.ok_or_else(|| parse_error(1, "missing header line".into()))?;
        let reference = reference
            .map(|r| {
                u64::try_from(r).map_err(|_| {
                    KnapsackError::InvalidInput(format!("negative reference value {r}"))
                })
            })
            .transpose()?;
        let items = ItemSet::try_from_signed(items, capacity)?;
        Ok(Self { items, reference })
    }
}

impl FromStr for Instance {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity {}", self.items.capacity())?;
        if let Some(reference) = self.reference {
            write!(f, " optimum {reference}")?;
        }
        writeln!(f)?;
        for item in self.items.items() {
            writeln!(f, "{} {}", item.weight, item.value)?;
        }
        Ok(())
    }
}

fn parse_header(fields: &[&str], line: usize) -> Result<(i64, Option<i64>)> {
    match fields {
        [_, capacity] => Ok((parse_number(capacity, "capacity", line)?, None)),
        [_, capacity, _, reference] => Ok((
            parse_number(capacity, "capacity", line)?,
            Some(parse_number(reference, "reference value", line)?),
        )),
        _ => Err(parse_error(
            line,
            format!(
                "expected `<label> <capacity> <label> <reference>`, found {} fields",
                fields.len()
            ),
        )),
    }
}

fn parse_number(token: &str, what: &str, line: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|e| parse_error(line, format!("invalid {what} `{token}`: {e}")))
}

fn parse_error(line: usize, message: String) -> KnapsackError {
    KnapsackError::Parse { line, message }
}

/// Attaches a line number to an input validation error.
fn at_line(err: KnapsackError, line: usize) -> KnapsackError {
    match err {
        KnapsackError::InvalidInput(message) => parse_error(line, message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Capacity 7 Optimum 9
1 1
3 4
4 5
5 7
";

    #[test]
    fn test_parse_sample() {
        let instance: Instance = SAMPLE.parse().unwrap();
        assert_eq!(instance.reference, Some(9));
        assert_eq!(instance.items.capacity(), 7);
        assert_eq!(instance.items.len(), 4);
        // Lines are `<weight> <value>`.
        assert_eq!(instance.items.items()[3], Item::new(7, 5));
    }

    #[test]
    fn test_header_without_reference() {
        let instance: Instance = "W 10\n2 3\n".parse().unwrap();
        assert_eq!(instance.reference, None);
        assert_eq!(instance.items.items(), &[Item::new(3, 2)]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let instance: Instance = "\nW 10 OPT 3\n\n2 3\n\n".parse().unwrap();
        assert_eq!(instance.items.len(), 1);
    }

    #[test]
    fn test_display_round_trip() {
        let instance: Instance = SAMPLE.parse().unwrap();
        let text = instance.to_string();
        assert!(text.starts_with("capacity 7 optimum 9\n"));
        let again: Instance = text.parse().unwrap();
        assert_eq!(again, instance);
    }

    #[test]
    fn test_bad_item_line_reports_line() {
        let err = "W 10 OPT 3\n2 3\n4 x\n".parse::<Instance>().unwrap_err();
        match err {
            KnapsackError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid value"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        let err = "W 10 OPT 3\n2 3 4\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, KnapsackError::Parse { line: 2, .. }));

        let err = "W 10 OPT\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, KnapsackError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_negative_numbers_rejected() {
        let err = "W 10\n-2 3\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, KnapsackError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("negative weight"));

        let err = "W -10\n2 3\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input() {
        assert!("".parse::<Instance>().is_err());
    }
}
