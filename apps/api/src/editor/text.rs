//! Text-field adapters mapping between editable flat text and ordered
//! string sequences.
//!
//! Both directions are inverses for the common case: non-empty entries
//! containing no embedded delimiter. Blank interior lines are preserved
//! positionally; the only trimming happens at the edges (empty input maps
//! to an empty sequence, and comma entries are whitespace-trimmed).

/// Multi-line text into one entry per line. Interior blank lines are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}

pub fn join_lines(entries: &[String]) -> String {
    entries.join("\n")
}

/// Comma-separated text into trimmed entries.
pub fn split_comma_trim(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|entry| entry.trim().to_string()).collect()
}

pub fn join_comma(entries: &[String]) -> String {
    entries.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_lines_round_trip() {
        let entries = strings(&["Shipped the thing", "Mentored two juniors"]);
        assert_eq!(split_lines(&join_lines(&entries)), entries);
    }

    #[test]
    fn test_split_lines_preserves_interior_blanks() {
        assert_eq!(split_lines("a\n\nb"), strings(&["a", "", "b"]));
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_comma_trim_round_trip() {
        let entries = strings(&["Python", "SQL", "Go"]);
        assert_eq!(split_comma_trim(&join_comma(&entries)), entries);
    }

    #[test]
    fn test_split_comma_trims_each_entry() {
        assert_eq!(
            split_comma_trim("Python,  SQL ,Go"),
            strings(&["Python", "SQL", "Go"])
        );
    }

    #[test]
    fn test_split_comma_empty_input() {
        assert!(split_comma_trim("").is_empty());
        assert!(split_comma_trim("   ").is_empty());
    }

    #[test]
    fn test_skills_edit_scenario() {
        // Seed skills ["Python", "SQL"]; user edits the text field.
        let seed = strings(&["Python", "SQL"]);
        let rendered = join_comma(&seed);
        assert_eq!(rendered, "Python, SQL");

        let edited = format!("{rendered}, Go");
        assert_eq!(split_comma_trim(&edited), strings(&["Python", "SQL", "Go"]));
    }
}
