//! Line parser for the `capacity : (index,weight,€cost) ...` format.

use crate::error::PackError;
use crate::model::{Amount, ConstraintViolation, Instance, Item, Limits};
use thiserror::Error;

/// A syntax error on one input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("item `{0}` is not of the form (index,weight,cost)")]
    MalformedItem(String),

    #[error("item index `{0}` is not a non-negative integer")]
    InvalidIndex(String),

    #[error("unexpected `{0}` where an item was expected")]
    UnexpectedText(String),
}

/// Parses one input line into an instance.
///
/// A line without a `:` separator (such as a blank line) is an empty
/// instance with zero capacity. Amounts are parsed exactly and items are
/// checked against `limits`; instance-level limits are left to the solver.
///
/// # Examples
///
/// ```
/// use u_packer::io::parse_line;
/// use u_packer::model::Limits;
///
/// let instance = parse_line(1, "8 : (1,15.3,€34) (2,6.0,€30)", &Limits::default()).unwrap();
/// assert_eq!(instance.capacity.units(), 800);
/// assert_eq!(instance.items.len(), 2);
/// ```
pub fn parse_line(line: usize, text: &str, limits: &Limits) -> Result<Instance, PackError> {
    let Some((capacity_text, items_text)) = text.split_once(':') else {
        return Ok(Instance::default());
    };

    let capacity = parse_amount(line, capacity_text)?;

    let mut items = Vec::new();
    let mut rest = items_text.trim();
    while !rest.is_empty() {
        let Some(open) = rest.strip_prefix('(') else {
            return Err(syntax(line, ParseErrorKind::UnexpectedText(rest.to_string())));
        };
        let Some((body, tail)) = open.split_once(')') else {
            return Err(syntax(line, ParseErrorKind::MalformedItem(rest.to_string())));
        };
        items.push(parse_item(line, body, limits)?);
        rest = tail.trim_start();
    }

    Ok(Instance::new(items, capacity))
}

fn parse_item(line: usize, body: &str, limits: &Limits) -> Result<Item, PackError> {
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let [index, weight, cost] = fields.as_slice() else {
        return Err(syntax(line, ParseErrorKind::MalformedItem(format!("({body})"))));
    };

    let index: usize = index
        .parse()
        .map_err(|_| syntax(line, ParseErrorKind::InvalidIndex(index.to_string())))?;
    let weight = parse_amount(line, weight)?;
    let cost = parse_amount(line, cost.trim_start_matches('€'))?;

    Item::with_limits(index, weight, cost, limits).map_err(|source| constraint(line, source))
}

fn parse_amount(line: usize, text: &str) -> Result<Amount, PackError> {
    text.parse().map_err(|source| constraint(line, source))
}

fn syntax(line: usize, kind: ParseErrorKind) -> PackError {
    PackError::Parse(ParseError { line, kind })
}

fn constraint(line: usize, source: ConstraintViolation) -> PackError {
    PackError::Constraint { line, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Instance, PackError> {
        parse_line(1, text, &Limits::default())
    }

    #[test]
    fn test_parse_full_line() {
        let instance = parse(
            "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)",
        )
        .unwrap();

        assert_eq!(instance.capacity, Amount::from_whole(81));
        assert_eq!(instance.items.len(), 6);
        let fourth = instance.items[3];
        assert_eq!(fourth.index(), 4);
        assert_eq!(fourth.weight().units(), 7230);
        assert_eq!(fourth.cost().units(), 7600);
    }

    #[test]
    fn test_parse_whitespace_and_plain_costs() {
        let instance = parse("  8:( 1 , 15.3 , 34 )(2,6.0,€ 30)  ").unwrap();
        assert_eq!(instance.capacity.units(), 800);
        assert_eq!(
            instance.items.iter().map(Item::index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(instance.items[1].cost().units(), 3000);
    }

    #[test]
    fn test_line_without_separator_is_empty() {
        assert_eq!(parse("").unwrap(), Instance::default());
        assert_eq!(parse("   ").unwrap(), Instance::default());
    }

    #[test]
    fn test_capacity_without_items() {
        let instance = parse("50 :").unwrap();
        assert_eq!(instance.capacity, Amount::from_whole(50));
        assert!(instance.items.is_empty());
    }

    #[test]
    fn test_malformed_item() {
        let err = parse_line(3, "10 : (1,2.0)", &Limits::default()).unwrap_err();
        match err {
            PackError::Parse(ParseError { line, kind }) => {
                assert_eq!(line, 3);
                assert_eq!(kind, ParseErrorKind::MalformedItem("(1,2.0)".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unclosed_item() {
        assert!(matches!(
            parse("10 : (1,2.0,€3"),
            Err(PackError::Parse(ParseError {
                kind: ParseErrorKind::MalformedItem(_),
                ..
            }))
        ));
    }

    #[test]
    fn test_text_between_items() {
        assert!(matches!(
            parse("10 : (1,2.0,€3) junk (2,1,1)"),
            Err(PackError::Parse(ParseError {
                kind: ParseErrorKind::UnexpectedText(_),
                ..
            }))
        ));
    }

    #[test]
    fn test_invalid_index() {
        assert!(matches!(
            parse("10 : (x,2.0,€3)"),
            Err(PackError::Parse(ParseError {
                kind: ParseErrorKind::InvalidIndex(_),
                ..
            }))
        ));
    }

    #[test]
    fn test_invalid_numbers_are_constraint_errors() {
        assert!(matches!(
            parse("ten : (1,2.0,€3)"),
            Err(PackError::Constraint {
                source: ConstraintViolation::InvalidAmount { .. },
                ..
            })
        ));
        assert!(matches!(
            parse("10 : (1,2.001,€3)"),
            Err(PackError::Constraint {
                source: ConstraintViolation::InvalidPrecision { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_item_limits_checked() {
        let err = parse_line(2, "10 : (4,100.5,€3)", &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            PackError::Constraint {
                line: 2,
                source: ConstraintViolation::ItemWeightExceeded { index: 4, .. }
            }
        ));
        assert_eq!(
            err.to_string(),
            "line 2: max weight of an item is 100.00 but item 4 weighs 100.50"
        );
    }

    #[test]
    fn test_capacity_not_checked_by_parser() {
        let instance = parse("150 : (1,1,€1)").unwrap();
        assert_eq!(instance.capacity, Amount::from_whole(150));
    }
}
