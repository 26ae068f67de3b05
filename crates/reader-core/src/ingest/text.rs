/// Flattens one page of extracted text into a single line.
///
/// Line breaks become spaces, except after a hard hyphen where the two halves
/// of the word are joined back together.
pub(super) fn flatten_page(text: &str) -> String {
    let mut out = String::new();
    let mut glue = false;
    for raw_line in text.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() && !glue {
            out.push(' ');
        }
        glue = ends_with_hard_hyphen(trimmed);
        if glue {
            out.push_str(trimmed.trim_end_matches('-'));
        } else {
            out.push_str(trimmed);
        }
    }
    out
}

fn ends_with_hard_hyphen(s: &str) -> bool {
    s.ends_with('-') && !s.ends_with("--") && s.len() > 1
}
