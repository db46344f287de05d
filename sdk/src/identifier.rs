use crate::error::ApiError;

const RESERVED_CHARS: &[char] = &['/', '\\', '?', '#', '%'];

/// Checks that a project, service or topic name can be placed into a resource path.
/// The value is used verbatim as a single path segment, so it must be non-empty,
/// can't be a dot segment and can't hold characters with a meaning in URLs.
pub fn validate(kind: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty()
        || value == "."
        || value == ".."
        || value
            .chars()
            .any(|c| RESERVED_CHARS.contains(&c) || c.is_control() || c.is_whitespace())
    {
        return Err(ApiError::InvalidIdentifier(kind, value.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_with_a_value_of_non_empty_string_should_be_valid() {
        assert!(validate("project", "my-project").is_ok());
        assert!(validate("topic", "orders.v1_eu-west").is_ok());
        assert!(validate("topic", "...").is_ok());
    }

    #[test]
    fn identifier_with_a_value_of_empty_string_should_be_invalid() {
        assert!(matches!(
            validate("service", ""),
            Err(ApiError::InvalidIdentifier("service", _))
        ));
    }

    #[test]
    fn identifier_containing_a_slash_should_be_invalid() {
        assert!(validate("topic", "orders/v1").is_err());
        assert!(validate("topic", "orders\\v1").is_err());
    }

    #[test]
    fn dot_segments_should_be_invalid() {
        assert!(validate("topic", ".").is_err());
        assert!(validate("topic", "..").is_err());
    }

    #[test]
    fn identifier_with_url_delimiters_should_be_invalid() {
        for value in ["a?b", "a#b", "%2e%2e", "a b", "a\nb"] {
            assert!(
                matches!(
                    validate("topic", value),
                    Err(ApiError::InvalidIdentifier("topic", _))
                ),
                "{value} should be rejected"
            );
        }
    }
}
