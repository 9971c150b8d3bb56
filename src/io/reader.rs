//! Line-oriented instance reader.

use super::parse::parse_line;
use crate::error::PackError;
use crate::model::{Instance, Limits};
use std::io::{BufRead, Lines};

/// Yields one [`Instance`] per input line.
///
/// # Examples
///
/// ```
/// use u_packer::io::InstanceReader;
///
/// let input = "81 : (1,53.38,€45)\n\n8 : (1,15.3,€34)\n";
/// let instances: Vec<_> = InstanceReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(instances.len(), 3);
/// assert!(instances[1].items.is_empty());
/// ```
pub struct InstanceReader<R> {
    lines: Lines<R>,
    line: usize,
    limits: Limits,
}

impl<R: BufRead> InstanceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            limits: Limits::default(),
        }
    }

    /// Sets the limits items are checked against while parsing.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

impl<R: BufRead> Iterator for InstanceReader<R> {
    type Item = Result<Instance, PackError>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line += 1;
        Some(
            text.map_err(PackError::from)
                .and_then(|text| parse_line(self.line, &text, &self.limits)),
        )
    }
}
