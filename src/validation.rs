//! Pure per-field request validation.
//!
//! Helpers accumulate into a plain field -> message map owned by the caller;
//! `finish` turns it into a result. The first failure per field wins.

use std::collections::HashMap;

pub type FieldErrors = HashMap<String, String>;

fn push(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_insert(message);
}

pub fn require(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        push(errors, field, format!("{} is required", label));
    }
}

pub fn max_len(errors: &mut FieldErrors, field: &str, label: &str, value: &str, limit: usize) {
    if value.chars().count() > limit {
        push(
            errors,
            field,
            format!("{} must not exceed {} characters", label, limit),
        );
    }
}

pub fn max_len_opt(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&str>,
    limit: usize,
) {
    if let Some(value) = value {
        max_len(errors, field, label, value, limit);
    }
}

pub fn digits_only(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        push(errors, field, format!("{} must contain only digits", label));
    }
}

pub fn uppercase_only(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if !value.chars().all(|c| c.is_ascii_uppercase()) {
        push(
            errors,
            field,
            format!("{} must contain only uppercase letters", label),
        );
    }
}

pub fn finish(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_empty_and_blank() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "CompanyName", "Company Name", "");
        require(&mut errors, "Phone", "Phone", "   ");
        require(&mut errors, "City", "City", "London");
        assert_eq!(
            errors.get("CompanyName").map(String::as_str),
            Some("Company Name is required")
        );
        assert!(errors.contains_key("Phone"));
        assert!(!errors.contains_key("City"));
    }

    #[test]
    fn max_len_mentions_the_limit() {
        let mut errors = FieldErrors::new();
        max_len(&mut errors, "CategoryName", "Category Name", "Confections Plus", 15);
        assert_eq!(
            errors.get("CategoryName").map(String::as_str),
            Some("Category Name must not exceed 15 characters")
        );
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "CustomerTypeID", "CustomerTypeID", "");
        digits_only(&mut errors, "CustomerTypeID", "CustomerTypeID", "abc");
        assert_eq!(
            errors.get("CustomerTypeID").map(String::as_str),
            Some("CustomerTypeID is required")
        );
    }

    #[test]
    fn character_class_checks() {
        let mut errors = FieldErrors::new();
        digits_only(&mut errors, "TerritoryID", "TerritoryID", "01581");
        uppercase_only(&mut errors, "CustomerID", "CustomerID", "ALFKI");
        assert!(errors.is_empty());

        digits_only(&mut errors, "TerritoryID", "TerritoryID", "15a81");
        uppercase_only(&mut errors, "CustomerID", "CustomerID", "alfki");
        assert!(errors.contains_key("TerritoryID"));
        assert!(errors.contains_key("CustomerID"));
    }

    #[test]
    fn finish_splits_on_emptiness() {
        assert!(finish(FieldErrors::new()).is_ok());
        let mut errors = FieldErrors::new();
        require(&mut errors, "CompanyName", "Company Name", "");
        assert!(finish(errors).is_err());
    }
}
