// Parsing of the free-text authoring form fields.
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::Category,
};

/// Missing or blank selects fall back to the journal category.
pub(super) fn parse_category(value: Option<&str>) -> ApplicationResult<Category> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(key) => Ok(key.parse::<Category>()?),
        None => Ok(Category::default()),
    }
}

/// Blank means "no project day".
pub(super) fn parse_day(value: Option<&str>) -> ApplicationResult<Option<i32>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ApplicationError::validation(format!("invalid project day: {raw}"))),
        None => Ok(None),
    }
}

pub(super) fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_journal() {
        assert_eq!(parse_category(None).unwrap(), Category::Journal);
        assert_eq!(parse_category(Some(" ")).unwrap(), Category::Journal);
        assert_eq!(parse_category(Some("ia")).unwrap(), Category::Ia);
        assert!(parse_category(Some("general")).is_err());
    }

    #[test]
    fn day_is_optional_but_numeric() {
        assert_eq!(parse_day(Some("")).unwrap(), None);
        assert_eq!(parse_day(Some(" 12 ")).unwrap(), Some(12));
        assert!(matches!(
            parse_day(Some("douze")),
            Err(ApplicationError::Validation(_))
        ));
    }
}
