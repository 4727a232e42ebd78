//! Single-line reformatting of extracted candidates.

/// Separator used between entries in the single-line form.
pub const SEPARATOR: &str = " | ";

/// Join lines into the one-line "integration task" form.
///
/// Entries are trimmed, blank entries dropped, and the rest joined with
/// [`SEPARATOR`]. Order-preserving; duplicates are kept (deduplication
/// belongs to the extractor, not the reformatter).
///
/// # Example
///
/// ```rust
/// use event_harvest::reformat::single_line;
///
/// assert_eq!(single_line(["A", " ", "B", ""]), "A | B");
/// ```
#[must_use]
pub fn single_line<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
