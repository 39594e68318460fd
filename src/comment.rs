//! Splitting and reassembly of multi-line developer comments.
//!
//! On encode the comment becomes an ordered sequence of `note` lines,
//! optionally donating its first line to the `resname` attribute. On
//! decode the attribute and the notes are joined back, in order.

/// Splits a comment into an optional resname hint and the remaining
/// note lines.
///
/// An empty comment yields no lines at all, never a single empty line.
/// When `take_resname_hint` is set, the first line is removed from the
/// sequence and returned separately.
pub fn split_comment(comment: &str, take_resname_hint: bool) -> (Option<String>, Vec<String>) {
    if comment.is_empty() {
        return (None, Vec::new());
    }
    let mut lines = comment.split('\n').map(str::to_string);
    let resname = if take_resname_hint { lines.next() } else { None };
    (resname, lines.collect())
}

/// Joins an optional resname-derived line and the note lines back into
/// one comment.
///
/// A present-but-empty resname still counts as a line, so comments that
/// start with a blank line survive a round trip.
pub fn join_comment(resname: Option<&str>, notes: &[String]) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(notes.len() + 1);
    if let Some(resname) = resname {
        lines.push(resname);
    }
    lines.extend(notes.iter().map(String::as_str));
    lines.join("\n")
}
