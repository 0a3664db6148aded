use once_cell::sync::Lazy;
use regex::Regex;
use rocket::form::FromForm;
use serde::Serialize;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Raw contact form submission. Every field is optional at the form layer so a
/// missing input turns into a field message instead of a rejected request.
#[derive(Debug, Default, Clone, FromForm, Serialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    #[field(name = "_honey")]
    #[serde(skip)]
    pub honeypot: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation failures, as translation keys.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactForm {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Bots fill the hidden field; people never see it.
    pub fn is_spam(&self) -> bool {
        self.honeypot.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactErrors> {
        let name = self.name().trim();
        let email = self.email().trim();
        let message = self.message().trim();

        let mut errors = ContactErrors::default();
        if name.chars().count() < NAME_MIN_CHARS {
            errors.name = Some("contact.nameInvalid");
        }
        if !is_valid_email(email) {
            errors.email = Some("contact.emailInvalid");
        }
        if message.chars().count() < MESSAGE_MIN_CHARS {
            errors.message = Some("contact.messageInvalid");
        }

        if errors.is_empty() {
            Ok(ContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}
