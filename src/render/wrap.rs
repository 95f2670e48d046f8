//! Greedy word wrapping that preserves whitespace.
//!
//! Text is split into alternating runs of words and whitespace. Runs are
//! packed onto a line while they fit within `width` characters. Runs are
//! never split: a word longer than `width` gets a line of its own, and
//! whitespace runs are kept as-is (callers trim the lines they emit).

/// Wrap `text` into lines of at most `width` characters where possible.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let chunks = split_chunks(text);
    let mut lines = Vec::new();
    let mut idx = 0;

    while idx < chunks.len() {
        let mut line = String::new();
        let mut line_len = 0;

        while let Some(chunk) = chunks.get(idx) {
            let chunk_len = chunk.chars().count();
            if line_len + chunk_len > width {
                break;
            }
            line.push_str(chunk);
            line_len += chunk_len;
            idx += 1;
        }

        // Overlong word on an empty line.
        if line.is_empty()
            && let Some(chunk) = chunks.get(idx)
        {
            line.push_str(chunk);
            idx += 1;
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

fn is_wrap_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (pos, c) in text.char_indices() {
        let space = is_wrap_whitespace(c);
        match in_space {
            Some(prev) if prev != space => {
                chunks.push(&text[start..pos]);
                start = pos;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_chunks_alternates() {
        assert_eq!(split_chunks("a  bc\td"), vec!["a", "  ", "bc", "\t", "d"]);
        assert_eq!(split_chunks(" lead"), vec![" ", "lead"]);
        assert!(split_chunks("").is_empty());
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_width() {
        assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", " ccc"]);
    }

    #[test]
    fn test_trailing_space_fits_exactly() {
        assert_eq!(wrap("aaa bbb ccc", 8), vec!["aaa bbb ", "ccc"]);
    }

    #[test]
    fn test_long_words_are_not_broken() {
        let long = "x".repeat(12);
        let text = format!("ab {} cd", long);
        assert_eq!(wrap(&text, 10), vec!["ab ".to_string(), long, " cd".to_string()]);
    }

    #[test]
    fn test_hyphens_are_not_break_points() {
        assert_eq!(wrap("well-known-name", 5), vec!["well-known-name"]);
    }

    #[test]
    fn test_whitespace_is_not_collapsed() {
        assert_eq!(wrap("a   b", 80), vec!["a   b"]);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        assert_eq!(wrap("ééé ééé", 7), vec!["ééé ééé"]);
    }
}
