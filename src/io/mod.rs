//! Text input and output.
//!
//! Each input line describes one package:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! The capacity comes first, then `(index,weight,cost)` items. Each
//! output line lists the chosen indices (`2,7`), or `-` when nothing fits.

mod format;
mod parse;
mod reader;

pub use format::{format_results, format_selection};
pub use parse::{parse_line, ParseError, ParseErrorKind};
pub use reader::InstanceReader;
