//! Record schema validator.
//!
//! [`validate`] is a pure function: given a [`UniversityDraft`] it either
//! returns the normalized [`UniversityPayload`] (contact emails flattened to
//! plain strings) or every field-level failure at once.
//!
//! Rules, each evaluated independently:
//! - `name`, `location`: required, i.e. non-empty after trimming.
//! - `website`: absolute URL with both a scheme and a host.
//! - `contact_emails`: at least one entry.
//! - `contact_emails.{i}.email`: `local@domain` where the domain has at least
//!   one dot and nothing contains whitespace.

mod errors;

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::model::draft::UniversityDraft;
use crate::model::university::UniversityPayload;

pub use errors::{ErrorKind, FieldError, FieldErrors, FieldPath};

// Dot-atom local part (no leading, trailing or doubled dots), then one or
// more hostname labels and an alphabetic top-level label.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Validates `draft`, collecting all failures rather than stopping at the first.
pub fn validate(draft: &UniversityDraft) -> Result<UniversityPayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(FieldPath::Name, ErrorKind::Required);
    }
    if draft.location.trim().is_empty() {
        errors.insert(FieldPath::Location, ErrorKind::Required);
    }
    if !is_absolute_url(&draft.website) {
        errors.insert(FieldPath::Website, ErrorKind::InvalidUrl);
    }
    if draft.contact_emails.is_empty() {
        errors.insert(FieldPath::ContactEmails, ErrorKind::MinCount);
    }
    for (index, entry) in draft.contact_emails.iter().enumerate() {
        if !is_email(&entry.email) {
            errors.insert(FieldPath::ContactEmail(index), ErrorKind::InvalidEmail);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UniversityPayload {
        name: draft.name.clone(),
        location: draft.location.clone(),
        website: draft.website.clone(),
        contact_emails: draft
            .contact_emails
            .iter()
            .map(|entry| entry.email.clone())
            .collect(),
    })
}

/// `true` when `value` parses as an absolute URL carrying a scheme and a host.
pub fn is_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draft::EmailEntry;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn mit() -> UniversityDraft {
        UniversityDraft {
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
            website: "https://mit.edu".to_string(),
            contact_emails: vec![EmailEntry::new("a@mit.edu")],
        }
    }

    #[test]
    fn valid_draft_is_flattened() {
        let payload = validate(&mit()).unwrap();
        assert_eq!(
            payload,
            UniversityPayload {
                name: "MIT".to_string(),
                location: "Cambridge".to_string(),
                website: "https://mit.edu".to_string(),
                contact_emails: vec!["a@mit.edu".to_string()],
            }
        );
    }

    #[test]
    fn bad_website_only_flags_website() {
        let draft = UniversityDraft {
            website: "not-a-url".to_string(),
            ..mit()
        };
        let errors = validate(&draft).unwrap_err();

        assert_eq!(errors.len(), 1);
        let error = errors.get(&FieldPath::Website).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidUrl);
        assert_eq!(error.message, "Invalid website URL");
    }

    #[test]
    fn all_failures_are_reported_together() {
        let draft = UniversityDraft {
            name: "  ".to_string(),
            location: String::new(),
            website: "mit.edu".to_string(),
            contact_emails: vec![],
        };
        let errors = validate(&draft).unwrap_err();
        let paths: Vec<FieldPath> = errors.iter().map(|(path, _)| path.clone()).collect();

        assert_eq!(
            paths,
            vec![
                FieldPath::Name,
                FieldPath::Location,
                FieldPath::Website,
                FieldPath::ContactEmails,
            ]
        );
        assert_eq!(
            errors.message_for(&FieldPath::ContactEmails),
            Some("At least one email is required")
        );
    }

    #[test]
    fn invalid_email_is_scoped_to_its_index() {
        let draft = UniversityDraft {
            contact_emails: vec![
                EmailEntry::new("a@mit.edu"),
                EmailEntry::new("nope"),
                EmailEntry::new("b@mit.edu"),
            ],
            ..mit()
        };
        let errors = validate(&draft).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&FieldPath::ContactEmail(1)).map(|e| e.kind),
            Some(ErrorKind::InvalidEmail)
        );
        assert_eq!(FieldPath::ContactEmail(1).to_string(), "contact_emails.1.email");
    }

    #[test]
    fn url_rules() {
        assert!(is_absolute_url("https://mit.edu"));
        assert!(is_absolute_url("http://localhost:8080/path?q=1"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("mit.edu"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("mailto:a@mit.edu"));
    }

    #[test]
    fn email_rules() {
        assert!(is_email("a@mit.edu"));
        assert!(is_email("first.last+tag@cs.mit.edu"));
        assert!(!is_email(""));
        assert!(!is_email("a@mit"));
        assert!(!is_email("a@@mit.edu"));
        assert!(!is_email("a b@mit.edu"));
        assert!(!is_email("a@mit.edu "));
        assert!(!is_email("@mit.edu"));
        assert!(!is_email("a@.edu"));
    }

    #[test]
    fn email_dots_and_top_level_label() {
        assert!(is_email("o'brien@uni-bonn.de"));
        assert!(is_email("a.b.c@mail.ox.ac.uk"));
        assert!(!is_email(".a@mit.edu"));
        assert!(!is_email("a.@mit.edu"));
        assert!(!is_email("a..b@mit.edu"));
        assert!(!is_email("a@mit.e1"));
        assert!(!is_email("a@mit.e"));
        assert!(!is_email("a@mit..edu"));
        assert!(!is_email("a@-mit.edu"));
    }

    proptest! {
        #[test]
        fn blank_name_fails_only_on_name(blank in "[ \t\n]{0,8}") {
            let draft = UniversityDraft { name: blank, ..mit() };
            let errors = validate(&draft).unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(
                errors.get(&FieldPath::Name).map(|e| e.kind),
                Some(ErrorKind::Required)
            );
        }

        #[test]
        fn blank_location_fails_only_on_location(blank in "[ \t\n]{0,8}") {
            let draft = UniversityDraft { location: blank, ..mit() };
            let errors = validate(&draft).unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(
                errors.get(&FieldPath::Location).map(|e| e.kind),
                Some(ErrorKind::Required)
            );
        }

        #[test]
        fn scheme_less_websites_are_rejected(host in "[a-z]{1,12}(\\.[a-z]{2,5}){0,2}") {
            prop_assert!(!is_absolute_url(&host));
        }

        #[test]
        fn at_less_entries_are_invalid_emails(local in "[a-z0-9.]{0,16}", valid_first in any::<bool>()) {
            let mut entries = vec![EmailEntry::new(local)];
            if valid_first {
                entries.insert(0, EmailEntry::new("ok@mit.edu"));
            }
            let bad_index = entries.len() - 1;
            let draft = UniversityDraft { contact_emails: entries, ..mit() };
            let errors = validate(&draft).unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors.get(&FieldPath::ContactEmail(bad_index)).is_some());
        }

        #[test]
        fn valid_drafts_round_trip(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            locals in proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..5),
        ) {
            let emails: Vec<String> = locals.iter().map(|l| format!("{l}@uni.edu")).collect();
            let draft = UniversityDraft {
                name: name.clone(),
                contact_emails: emails.iter().map(EmailEntry::new).collect(),
                ..mit()
            };
            let payload = validate(&draft).unwrap();
            prop_assert_eq!(payload.name, name);
            prop_assert_eq!(payload.contact_emails, emails);
        }
    }
}
