use std::collections::BTreeMap;
use std::fmt;

/// Path of a validated field, displayed the way form libraries address it
/// (`contact_emails.2.email`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Name,
    Location,
    Website,
    /// The contact-email list as a whole.
    ContactEmails,
    /// A single entry of the contact-email list, by position.
    ContactEmail(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Location => f.write_str("location"),
            FieldPath::Website => f.write_str("website"),
            FieldPath::ContactEmails => f.write_str("contact_emails"),
            FieldPath::ContactEmail(index) => write!(f, "contact_emails.{index}.email"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidUrl,
    MinCount,
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    /// Human-readable text rendered under the field.
    pub message: &'static str,
}

impl FieldError {
    fn new(path: &FieldPath, kind: ErrorKind) -> Self {
        let message = match (kind, path) {
            (ErrorKind::Required, FieldPath::Name) => "Name is required",
            (ErrorKind::Required, FieldPath::Location) => "Location is required",
            (ErrorKind::Required, _) => "This field is required",
            (ErrorKind::InvalidUrl, _) => "Invalid website URL",
            (ErrorKind::MinCount, _) => "At least one email is required",
            (ErrorKind::InvalidEmail, _) => "Invalid email",
        };
        Self { kind, message }
    }
}

/// Field-level failures of one validation run, ordered by field path.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<FieldPath, FieldError>);

impl FieldErrors {
    pub(crate) fn insert(&mut self, path: FieldPath, kind: ErrorKind) {
        let error = FieldError::new(&path, kind);
        self.0.insert(path, error);
    }

    pub fn get(&self, path: &FieldPath) -> Option<&FieldError> {
        self.0.get(path)
    }

    pub fn message_for(&self, path: &FieldPath) -> Option<&'static str> {
        self.0.get(path).map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldError)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
