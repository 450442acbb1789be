use serde::{Deserialize, Serialize};

/// One of the four contact form inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Meno",
            ContactField::Email => "E-mail",
            ContactField::Phone => "Telefón (nepovinné)",
            ContactField::Message => "Správa",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

/// Payload sent to the contact endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

/// Outcome of one submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String },
    Failure { message: String },
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        SubmissionResult::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        SubmissionResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionResult::Success { message } | SubmissionResult::Failure { message } => message,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            SubmissionResult::Success { .. } => NotificationKind::Success,
            SubmissionResult::Failure { .. } => NotificationKind::Failure,
        }
    }
}

/// Severity of a user notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Client-side form state: the four inputs and the in-flight flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub submitting: bool,
}

impl FormState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Clears the inputs, leaves `submitting` alone
    pub fn clear_fields(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    /// Payload as validated; the e-mail goes out trimmed
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

/// Submission log entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: u64,
    #[serde(flatten)]
    pub request: ContactRequest,
    pub confirmation: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
