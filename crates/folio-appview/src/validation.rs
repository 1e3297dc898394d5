use crate::error::AppError;

/// Validate that a string's length falls within the given range (inclusive).
pub fn validate_string_length(
    value: &str,
    min: usize,
    max: usize,
    field_name: &str,
) -> Result<(), AppError> {
    if value.len() < min || value.len() > max {
        return Err(AppError::BadRequest(format!(
            "{field_name} must be {min}-{max} characters"
        )));
    }
    Ok(())
}

/// Validate that a slug contains only lowercase letters, digits, and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "slug must contain only lowercase letters, numbers, and hyphens".into(),
        ))
    }
}

/// Derive a URL slug from a title: lowercased, with runs of whitespace,
/// underscores, and hyphens collapsed to single hyphens and everything else
/// non-alphanumeric dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_bounds() {
        assert!(validate_string_length("abc", 3, 200, "title").is_ok());
        assert!(validate_string_length("ab", 3, 200, "title").is_err());
        assert!(validate_string_length(&"x".repeat(201), 3, 200, "title").is_err());
    }

    #[test]
    fn test_slug_charset() {
        assert!(validate_slug("hello-world-2024").is_ok());
        assert!(validate_slug("Hello-World").is_err());
        assert!(validate_slug("hello world").is_err());
        assert!(validate_slug("hello/world").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & Axum — notes  "), "rust-axum-notes");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("under_scored title"), "under-scored-title");
    }

    #[test]
    fn test_slugify_output_is_a_valid_slug() {
        for title in ["Hello, World!", "A  B   C", "__x__"] {
            assert!(validate_slug(&slugify(title)).is_ok());
        }
    }
}
