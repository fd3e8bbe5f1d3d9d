//! Client-side validation of form input.
//!
//! Mirrors the constraints the server enforces so bad input is rejected
//! with field-level messages before any request goes out.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// WHATWG email pattern, same one the server compiles.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex compiles")
});

pub const TITLE_MAX_CHARS: usize = 255;
pub const NAME_MAX_CHARS: usize = 255;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Field name -> first failing rule's message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&joined.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIssueInput {
    pub title: String,
    pub description: String,
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginInput, ValidationErrors> {
    let email = email.trim();
    let mut errs = ValidationErrors::default();

    check_email(&mut errs, email);
    check_password(&mut errs, password);

    errs.into_result(LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_register(
    email: &str,
    name: &str,
    password: &str,
) -> Result<RegisterInput, ValidationErrors> {
    let email = email.trim();
    let name = name.trim();
    let mut errs = ValidationErrors::default();

    check_email(&mut errs, email);
    if name.is_empty() {
        errs.insert("name", "name is required");
    } else if name.chars().count() > NAME_MAX_CHARS {
        errs.insert("name", "name must be at most 255 characters");
    }
    check_password(&mut errs, password);

    errs.into_result(RegisterInput {
        email: email.to_string(),
        name: name.to_string(),
        password: password.to_string(),
    })
}

/// Description is free text and defaults to empty; only the title is
/// constrained.
pub fn validate_create_issue(
    title: &str,
    description: &str,
) -> Result<CreateIssueInput, ValidationErrors> {
    let mut errs = ValidationErrors::default();

    if title.is_empty() {
        errs.insert("title", "Title is required");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errs.insert("title", "Title too long");
    }

    errs.into_result(CreateIssueInput {
        title: title.to_string(),
        description: description.to_string(),
    })
}

fn check_email(errs: &mut ValidationErrors, email: &str) {
    if email.is_empty() {
        errs.insert("email", "email is required");
    } else if !EMAIL_RE.is_match(email) {
        errs.insert("email", "not a valid email");
    }
}

fn check_password(errs: &mut ValidationErrors, password: &str) {
    if password.is_empty() {
        errs.insert("password", "must enter a password");
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        errs.insert("password", "Password must be at least 8 characters");
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errs.insert("password", "Password must contain at least one uppercase letter");
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errs.insert("password", "Password must contain at least one lowercase letter");
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        errs.insert("password", "Password must contain at least one number");
    } else if !password.chars().any(|c| "!@#$%^&*".contains(c)) {
        errs.insert("password", "Password must contain at least one special character");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GOOD_PASSWORD: &str = "Passw0rd!";

    // ==================== Email ====================

    #[test]
    fn test_login_valid() {
        let input = validate_login("jane@example.com", GOOD_PASSWORD).unwrap();
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.password, GOOD_PASSWORD);
    }

    #[test]
    fn test_email_trimmed() {
        let input = validate_login("  jane@example.com  ", GOOD_PASSWORD).unwrap();
        assert_eq!(input.email, "jane@example.com");
    }

    #[test]
    fn test_email_required() {
        let errs = validate_login("", GOOD_PASSWORD).unwrap_err();
        assert_eq!(errs.get("email"), Some("email is required"));
    }

    #[test]
    fn test_email_invalid() {
        for bad in ["jane", "jane@", "@example.com", "jane example.com", "jane@@example.com"] {
            let errs = validate_login(bad, GOOD_PASSWORD).unwrap_err();
            assert_eq!(errs.get("email"), Some("not a valid email"), "input: {:?}", bad);
        }
    }

    // ==================== Password ====================

    #[test]
    fn test_password_too_short() {
        let errs = validate_login("jane@example.com", "Ab1!").unwrap_err();
        assert_eq!(errs.get("password"), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn test_password_missing_uppercase() {
        let errs = validate_login("jane@example.com", "passw0rd!").unwrap_err();
        assert_eq!(
            errs.get("password"),
            Some("Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_password_missing_lowercase() {
        let errs = validate_login("jane@example.com", "PASSW0RD!").unwrap_err();
        assert_eq!(
            errs.get("password"),
            Some("Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_password_missing_digit() {
        let errs = validate_login("jane@example.com", "Password!").unwrap_err();
        assert_eq!(errs.get("password"), Some("Password must contain at least one number"));
    }

    #[test]
    fn test_password_missing_special() {
        let errs = validate_login("jane@example.com", "Passw0rdX").unwrap_err();
        assert_eq!(
            errs.get("password"),
            Some("Password must contain at least one special character")
        );
    }

    #[test]
    fn test_both_fields_reported() {
        let errs = validate_login("nope", "short").unwrap_err();
        assert!(errs.get("email").is_some());
        assert!(errs.get("password").is_some());
        assert_eq!(errs.iter().count(), 2);
    }

    // ==================== Register ====================

    #[test]
    fn test_register_valid() {
        let input = validate_register("jane@example.com", " Jane Doe ", GOOD_PASSWORD).unwrap();
        assert_eq!(input.name, "Jane Doe");
    }

    #[test]
    fn test_register_name_required() {
        let errs = validate_register("jane@example.com", "   ", GOOD_PASSWORD).unwrap_err();
        assert_eq!(errs.get("name"), Some("name is required"));
    }

    #[test]
    fn test_register_name_too_long() {
        let name = "x".repeat(256);
        let errs = validate_register("jane@example.com", &name, GOOD_PASSWORD).unwrap_err();
        assert_eq!(errs.get("name"), Some("name must be at most 255 characters"));
    }

    // ==================== Create issue ====================

    #[test]
    fn test_create_issue_valid() {
        let input = validate_create_issue("Fix bug", "").unwrap();
        assert_eq!(input.title, "Fix bug");
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_title_required() {
        let errs = validate_create_issue("", "desc").unwrap_err();
        assert_eq!(errs.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_title_boundary_255_accepted() {
        let title = "a".repeat(255);
        assert!(validate_create_issue(&title, "").is_ok());
    }

    #[test]
    fn test_title_boundary_256_rejected() {
        let title = "a".repeat(256);
        let errs = validate_create_issue(&title, "").unwrap_err();
        assert_eq!(errs.get("title"), Some("Title too long"));
    }

    #[test]
    fn test_title_multibyte_counted_by_chars() {
        // 255 multi-byte characters are within the limit even though the
        // byte length is far larger.
        let title = "日".repeat(255);
        assert!(validate_create_issue(&title, "").is_ok());
        let title = "日".repeat(256);
        assert!(validate_create_issue(&title, "").is_err());
    }

    #[test]
    fn test_display_is_field_level() {
        let errs = validate_login("", "").unwrap_err();
        let text = errs.to_string();
        assert!(text.contains("email: email is required"));
        assert!(text.contains("password: must enter a password"));
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_password_without_special_rejected(pw in "[a-zA-Z0-9]{8,20}") {
            prop_assert!(validate_login("jane@example.com", &pw).is_err());
        }

        #[test]
        fn prop_wellformed_password_accepted(
            upper in "[A-Z]{1,4}",
            lower in "[a-z]{1,8}",
            digit in "[0-9]{1,4}",
            special in "[!@#$%^&*]{1,2}",
        ) {
            let pw = format!("{}{}{}{}", upper, lower, digit, special);
            prop_assume!(pw.chars().count() >= 8);
            prop_assert!(validate_login("jane@example.com", &pw).is_ok());
        }

        #[test]
        fn prop_title_within_limit_accepted(title in "[a-zA-Z0-9 ]{1,255}") {
            prop_assert!(validate_create_issue(&title, "").is_ok());
        }

        #[test]
        fn prop_simple_emails_accepted(
            local in "[a-z][a-z0-9.]{0,10}[a-z0-9]",
            domain in "[a-z][a-z0-9]{0,10}",
        ) {
            let email = format!("{}@{}.com", local, domain);
            prop_assume!(!email.contains(".."));
            prop_assert!(validate_login(&email, GOOD_PASSWORD).is_ok());
        }
    }
}
