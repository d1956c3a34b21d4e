use serde::Deserialize;

use crate::models::participant::{NewParticipant, SalaryRange, WorkPreference};

/// Raw registration payload. Enumerations arrive as strings so that an
/// unknown value is reported alongside every other field problem.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParticipantRequest {
    pub email: String,
    pub name: String,
    pub zip_code: String,
    pub position: String,
    pub work_preference: String,
    pub salary_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validates every field, collecting all failures.
///
/// On success the email is trimmed with its domain lowercased, and name and
/// position are trimmed.
pub fn validate_participant(
    req: &CreateParticipantRequest,
) -> Result<NewParticipant, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = normalize_email(&req.email);
    if !is_valid_email(&email) {
        errors.push(field_error("email", "must be a valid email address"));
    }

    let name = req.name.trim();
    if name.is_empty() {
        errors.push(field_error("name", "must not be empty"));
    }

    let zip_code = req.zip_code.trim();
    if !is_valid_zip(zip_code) {
        errors.push(field_error("zip_code", "must be exactly 5 digits"));
    }

    let position = req.position.trim();
    if position.is_empty() {
        errors.push(field_error("position", "must not be empty"));
    }

    let work_preference = req
        .work_preference
        .parse::<WorkPreference>()
        .map_err(|reason| {
            errors.push(FieldError {
                field: "work_preference",
                reason,
            })
        })
        .ok();

    let salary_range = req
        .salary_range
        .parse::<SalaryRange>()
        .map_err(|reason| {
            errors.push(FieldError {
                field: "salary_range",
                reason,
            })
        })
        .ok();

    match (work_preference, salary_range) {
        (Some(work_preference), Some(salary_range)) if errors.is_empty() => Ok(NewParticipant {
            email,
            name: name.to_string(),
            zip_code: zip_code.to_string(),
            position: position.to_string(),
            work_preference,
            salary_range,
        }),
        _ => Err(errors),
    }
}

fn field_error(field: &'static str, reason: &str) -> FieldError {
    FieldError {
        field,
        reason: reason.to_string(),
    }
}

fn normalize_email(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => trimmed.to_string(),
    }
}

/// Characters allowed in an unquoted local-part atom (RFC 5322 `atext`).
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

const MAX_EMAIL_LEN: usize = 254;

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }

    // Dot-atom: non-empty atoms of atext separated by single dots.
    let local_ok = local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    });
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateParticipantRequest {
        CreateParticipantRequest {
            email: "Jordan.Lee@Example.COM".to_string(),
            name: " Jordan Lee ".to_string(),
            zip_code: "94105".to_string(),
            position: "Data Analyst".to_string(),
            work_preference: "No strong preference".to_string(),
            salary_range: "$75,000 - $100,000".to_string(),
        }
    }

    #[test]
    fn test_valid_request_normalizes() {
        let p = validate_participant(&request()).unwrap();
        assert_eq!(p.email, "Jordan.Lee@example.com");
        assert_eq!(p.name, "Jordan Lee");
        assert_eq!(p.work_preference, WorkPreference::NoPreference);
        assert_eq!(p.salary_range, SalaryRange::From75kTo100k);
    }

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.co", "first.last+tag@sub.example.org", "x_y@my-host.io"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@b",
            "a@@b.com",
            "a b@c.com",
            "a@-b.com",
            "a@b.c",
            "a@b..com",
            ".a@b.com",
            "a@b.c0m",
            "a<b>@example.com",
            "a\"b@example.com",
            "a,b@example.com",
            "a(b)@example.com",
            "a;b@example.com",
            "a[b]@example.com",
            "a\\b@example.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_local_part_specials_allowed() {
        for email in ["o'brien@example.com", "a!#$%&*/=?^_`{|}~-z@example.com"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_email_length_cap() {
        let label = "d".repeat(61);
        let domain = format!("{label}.{label}.{label}.com");
        let at_limit = format!("{}@{domain}", "a".repeat(64));
        assert_eq!(at_limit.len(), 254);
        assert!(is_valid_email(&at_limit));

        let over_limit = format!("{}@d{domain}", "a".repeat(64));
        assert_eq!(over_limit.len(), 255);
        assert!(!is_valid_email(&over_limit));
    }

    #[test]
    fn test_zip_codes() {
        assert!(is_valid_zip("00501"));
        assert!(!is_valid_zip("1234"));
        assert!(!is_valid_zip("123456"));
        assert!(!is_valid_zip("12a45"));
        assert!(!is_valid_zip("１２３４５"));
    }

    #[test]
    fn test_blank_name_and_position_rejected() {
        let mut req = request();
        req.name = "   ".to_string();
        req.position = String::new();
        let errors = validate_participant(&req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "position"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let req = CreateParticipantRequest {
            email: "nope".to_string(),
            name: "Sam".to_string(),
            zip_code: "ABCDE".to_string(),
            position: "PM".to_string(),
            work_preference: "Sometimes".to_string(),
            salary_range: "lots".to_string(),
        };
        let errors = validate_participant(&req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["email", "zip_code", "work_preference", "salary_range"]
        );
    }

    #[test]
    fn test_enum_values_are_case_sensitive() {
        let mut req = request();
        req.work_preference = "remote".to_string();
        assert!(validate_participant(&req).is_err());
    }
}
