use super::university::University;

/// A single entry in the editable contact-email list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailEntry {
    pub email: String,
}

impl EmailEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Candidate record held by an add/edit form before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniversityDraft {
    pub name: String,
    pub location: String,
    pub website: String,
    pub contact_emails: Vec<EmailEntry>,
}

impl UniversityDraft {
    /// Starting point of the add form: empty fields and one empty email slot.
    pub fn empty() -> Self {
        Self {
            contact_emails: vec![EmailEntry::default()],
            ..Self::default()
        }
    }
}

impl From<&University> for UniversityDraft {
    fn from(university: &University) -> Self {
        Self {
            name: university.name.clone(),
            location: university.location.clone(),
            website: university.website.clone(),
            contact_emails: university
                .contact_emails
                .iter()
                .map(EmailEntry::new)
                .collect(),
        }
    }
}
