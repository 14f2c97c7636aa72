use super::*;

mod list {
    use super::*;

    #[test]
    fn should_sort_header_names() {
        // Arrange & Act
        let headers = AllowedHeaders::list(["X-Trace", "Content-Type", "Authorization"]);

        // Assert
        assert_eq!(
            headers.as_slice(),
            ["Authorization", "Content-Type", "X-Trace"]
        );
    }

    #[test]
    fn should_collapse_case_insensitive_duplicates_keeping_first_spelling() {
        // Arrange & Act
        let headers = AllowedHeaders::list(["content-type", "Content-Type", " CONTENT-TYPE "]);

        // Assert
        assert_eq!(headers.as_slice(), ["content-type"]);
    }

    #[test]
    fn should_skip_blank_entries() {
        let headers = AllowedHeaders::list(["", "  ", "Authorization"]);

        assert_eq!(headers.as_slice(), ["Authorization"]);
    }
}

mod header_value {
    use super::*;

    #[test]
    fn should_join_default_headers_with_comma_space() {
        // Arrange
        let headers = AllowedHeaders::default();

        // Act
        let value = headers.header_value();

        // Assert
        assert_eq!(value.as_deref(), Some("Authorization, Content-Type"));
    }

    #[test]
    fn should_return_none_when_empty() {
        assert_eq!(AllowedHeaders::list(Vec::<&str>::new()).header_value(), None);
    }
}

mod first_invalid {
    use super::*;

    #[test]
    fn should_report_header_name_with_separator() {
        let headers = AllowedHeaders::list(["Content-Type", "X:Bad"]);

        assert_eq!(headers.first_invalid(), Some("X:Bad"));
    }
}
