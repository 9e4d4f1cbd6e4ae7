//! Shared utility functions for tree rendering

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE_INDENT: &str = "│   ";
pub const SPACE_INDENT: &str = "    ";

/// Connector drawn in front of an entry's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_INDENT)
    } else {
        format!("{}{}", current_prefix, PIPE_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector() {
        assert_eq!(connector(true), "└── ");
        assert_eq!(connector(false), "├── ");
    }

    #[test]
    fn test_child_prefix_grows_one_unit() {
        assert_eq!(child_prefix("", true), "    ");
        assert_eq!(child_prefix("", false), "│   ");
        assert_eq!(child_prefix("│   ", true), "│       ");
        assert_eq!(child_prefix("    ", false), "    │   ");
        assert_eq!(
            child_prefix("│   ", false).chars().count(),
            "│   ".chars().count() * 2
        );
    }
}
