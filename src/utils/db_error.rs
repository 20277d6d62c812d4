//! Helpers for classifying SQLx database errors.

/// Unique constraint on `links.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "links_short_code_key";

/// Unique constraint on `links.original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "links_original_url_key";

/// Returns the name of the violated unique constraint, if `e` is a unique
/// violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Returns true if `e` is a unique violation on the short code column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    unique_violation_constraint(e) == Some(SHORT_CODE_CONSTRAINT)
}

/// Returns true if `e` is a unique violation on the original URL column.
pub fn is_unique_violation_on_original_url(e: &sqlx::Error) -> bool {
    unique_violation_constraint(e) == Some(ORIGINAL_URL_CONSTRAINT)
}
