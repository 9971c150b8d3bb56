//! Output rendering.

use crate::solver::CandidateSet;

/// Renders a selection as comma-joined indices in selection order, or
/// `-` when nothing was selected.
pub fn format_selection(selection: &CandidateSet) -> String {
    if selection.is_empty() {
        return "-".to_string();
    }
    selection
        .indices()
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders one selection per line, without a trailing newline.
pub fn format_results<'a, I>(selections: I) -> String
where
    I: IntoIterator<Item = &'a CandidateSet>,
{
    selections
        .into_iter()
        .map(format_selection)
        .collect::<Vec<_>>()
        .join("\n")
}
