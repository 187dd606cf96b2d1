/// Trims surrounding whitespace from a CSV field
pub fn clean_value(value: &str) -> String {
    value.trim().to_string()
}

/// Splits the `;`-separated queues column into clean queue names.
/// Literal double quotes are stripped, empty entries are dropped.
pub fn split_queue_names(raw: &str) -> Vec<String> {
    raw.replace('"', "")
        .split(';')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value_trims_whitespace() {
        assert_eq!(clean_value("  Dupont \t"), "Dupont");
        assert_eq!(clean_value("intact"), "intact");
        assert_eq!(clean_value("   "), "");
    }

    #[test]
    fn test_split_queue_names() {
        let names = split_queue_names(" Cardiologie ; Urgences;Pediatrie ");
        assert_eq!(names, vec!["Cardiologie", "Urgences", "Pediatrie"]);
    }

    #[test]
    fn test_split_queue_names_strips_quotes() {
        let names = split_queue_names("\"Cardiologie\";\"Urgences\"");
        assert_eq!(names, vec!["Cardiologie", "Urgences"]);
    }

    #[test]
    fn test_split_queue_names_empty() {
        assert!(split_queue_names("").is_empty());
        assert!(split_queue_names(" ; ;").is_empty());
    }
}
