//! Common utilities for output formatters

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Column headers for a resource listing: `["<name> ID", "<name> Description"]`
pub fn header_labels(resource_name: &str) -> [String; 2] {
    [
        format!("{} ID", resource_name),
        format!("{} Description", resource_name),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_escape_csv_empty() {
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_header_labels() {
        assert_eq!(header_labels("Sites"), ["Sites ID", "Sites Description"]);
        assert_eq!(header_labels("Browsers"), ["Browsers ID", "Browsers Description"]);
    }
}
