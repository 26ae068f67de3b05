use unicode_segmentation::UnicodeSegmentation;

/// A word split around its optical recognition point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pivot<'a> {
    pub before: &'a str,
    pub pivot: &'a str,
    pub after: &'a str,
}

impl Pivot<'_> {
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.pivot.is_empty() && self.after.is_empty()
    }
}

/// Pivot index for a word of `len` graphemes: the middle, shifted one left
/// for words longer than five.
pub fn pivot_offset(len: usize) -> usize {
    let half = len / 2;
    if len > 5 {
        half - 1
    } else {
        half
    }
}

pub fn split_pivot(word: &str) -> Pivot<'_> {
    let graphemes: Vec<(usize, &str)> = word.grapheme_indices(true).collect();
    let offset = pivot_offset(graphemes.len());
    let Some(&(start, letter)) = graphemes.get(offset) else {
        return Pivot {
            before: word,
            pivot: "",
            after: "",
        };
    };
    let end = start + letter.len();
    Pivot {
        before: &word[..start],
        pivot: letter,
        after: &word[end..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_shifts_left_above_five() {
        assert_eq!(pivot_offset(0), 0);
        assert_eq!(pivot_offset(1), 0);
        assert_eq!(pivot_offset(4), 2);
        assert_eq!(pivot_offset(5), 2);
        assert_eq!(pivot_offset(6), 2);
        assert_eq!(pivot_offset(7), 2);
        assert_eq!(pivot_offset(8), 3);
        assert_eq!(pivot_offset(13), 5);
    }

    #[test]
    fn empty_word_has_empty_parts() {
        let p = split_pivot("");
        assert!(p.is_empty());
    }

    #[test]
    fn single_letter_is_the_pivot() {
        let p = split_pivot("a");
        assert_eq!((p.before, p.pivot, p.after), ("", "a", ""));
    }

    #[test]
    fn splits_around_pivot_letter() {
        let p = split_pivot("three");
        assert_eq!((p.before, p.pivot, p.after), ("th", "r", "ee"));
        let p = split_pivot("four");
        assert_eq!((p.before, p.pivot, p.after), ("fo", "u", "r"));
        let p = split_pivot("reading");
        assert_eq!((p.before, p.pivot, p.after), ("re", "a", "ding"));
    }

    #[test]
    fn parts_cover_the_whole_word() {
        for word in ["a", "be", "cat", "word", "hello", "people", "extraordinary"] {
            let p = split_pivot(word);
            let n = word.chars().count();
            assert_eq!(
                p.before.chars().count() + 1 + p.after.chars().count(),
                n,
                "{word}"
            );
            assert_eq!(format!("{}{}{}", p.before, p.pivot, p.after), word);
        }
    }

    #[test]
    fn multibyte_letters_stay_whole() {
        let p = split_pivot("café");
        assert_eq!((p.before, p.pivot, p.after), ("ca", "f", "é"));
        let p = split_pivot("naïve");
        assert_eq!((p.before, p.pivot, p.after), ("na", "ï", "ve"));
    }
}
