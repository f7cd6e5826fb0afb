//! Contact, project inquiry and newsletter forms.
//!
//! Validation happens locally and never raises a toast. A submission that
//! reaches the endpoint raises exactly one toast: on success the form is
//! cleared, on failure it is kept so the visitor can resubmit. Nothing is
//! retried automatically.

use crate::{Error, Result, SiteContext, Toast, utils::slugify};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Services offered in the home page contact section, as (value, label).
pub const SECTION_SERVICES: [(&str, &str); 4] = [
    ("web-development", "Web Development"),
    ("graphic-design", "Graphic Design"),
    ("mobile-development", "Mobile App Development"),
    ("consultation", "Consultation"),
];

/// Services offered on the contact page; values are the slugified labels.
pub const CONTACT_SERVICES: [&str; 7] = [
    "Web Development",
    "Mobile App Development",
    "Graphic Design",
    "Brand Identity",
    "E-commerce Solutions",
    "Consultation",
    "Other",
];

/// Budget ranges, as (value, label).
pub const BUDGETS: [(&str, &str); 5] = [
    ("under-1k", "Under $1,000"),
    ("1k-5k", "$1,000 - $5,000"),
    ("5k-10k", "$5,000 - $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("over-25k", "Over $25,000"),
];

/// Timelines, as (value, label).
pub const TIMELINES: [(&str, &str); 5] = [
    ("asap", "ASAP"),
    ("1-month", "Within 1 month"),
    ("3-months", "Within 3 months"),
    ("6-months", "Within 6 months"),
    ("flexible", "Flexible"),
];

/// Contact details shown next to the forms, as (title, content).
pub const CONTACT_INFO: [(&str, &str); 4] = [
    ("Address", "123 Tech Street, Innovation District, CA 90210"),
    ("Phone", "+1 (908) 205-1993"),
    ("Email", "designdynasty84@gmail.com"),
    ("Business Hours", "Mon - Fri: 9:00 AM - 6:00 PM EST"),
];

/// Contact page service options as (value, label).
pub fn contact_service_options() -> Vec<(String, &'static str)> {
    CONTACT_SERVICES
        .into_iter()
        .map(|label| (slugify(label), label))
        .collect()
}

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field is filled and the email looks like one.
    pub fn validate(&self) -> Result<()> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("service", self.service.as_str()),
            ("message", self.message.as_str()),
        ])?;
        check_email(&self.email)
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The detailed form on the contact page.
///
/// It is sent through the same endpoint as [`ContactForm`], with the extra
/// fields folded into the message body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ProjectInquiry {
    /// Name, email, service and message are required.
    pub fn validate(&self) -> Result<()> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("service", self.service.as_str()),
            ("message", self.message.as_str()),
        ])?;
        check_email(&self.email)
    }

    /// The contact request actually sent.
    pub fn to_contact(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            service: self.service.clone(),
            message: format!(
                "Phone: {}\nCompany: {}\nBudget: {}\nTimeline: {}\n\nMessage: {}",
                self.phone, self.company, self.budget, self.timeline, self.message
            ),
        }
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body of `POST /api/newsletter`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// Create a form holding `email`.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// The email is required.
    pub fn validate(&self) -> Result<()> {
        require(&[("email", self.email.as_str())])?;
        check_email(&self.email)
    }

    /// Reset the email.
    pub fn clear(&mut self) {
        self.email.clear();
    }
}

/// The remote side of the forms.
pub trait Submitter: Send + Sync {
    /// Send a contact request. Any 2xx answer is success.
    fn contact(&self, form: &ContactForm) -> impl Future<Output = Result<()>> + Send;

    /// Subscribe an email to the newsletter. Any 2xx answer is success.
    fn newsletter(&self, form: &NewsletterForm) -> impl Future<Output = Result<()>> + Send;
}

/// What happened to a form submission.
#[derive(Debug)]
pub enum Outcome {
    /// Refused locally; nothing was sent and no toast was raised.
    Rejected(Error),
    /// Delivered; the form was cleared.
    Sent,
    /// Delivery failed; the form was kept.
    Failed,
}

impl Outcome {
    /// Whether the submission was delivered.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Toast texts for one form.
struct Notice {
    success: &'static str,
    failure: &'static str,
}

const CONTACT: Notice = Notice {
    success: "Thank you for your message! We will get back to you soon.",
    failure: "Failed to send message. Please try again.",
};

const INQUIRY: Notice = Notice {
    success: "Thank you for your message! We'll get back to you within 24 hours.",
    failure: "Failed to send message. Please try again or contact us directly.",
};

const NEWSLETTER: Notice = Notice {
    success: "Thank you for subscribing to our newsletter!",
    failure: "Failed to subscribe. Please try again.",
};

impl<S: Submitter> SiteContext<S> {
    /// Submit the contact section form.
    pub async fn submit_contact(&self, form: &mut ContactForm) -> Outcome {
        if let Err(e) = form.validate() {
            tracing::debug!("contact form refused: {e}");
            return Outcome::Rejected(e);
        }

        let result = self.submitter.contact(form).await;
        if self.report("contact", result, &CONTACT) {
            form.clear();
            Outcome::Sent
        } else {
            Outcome::Failed
        }
    }

    /// Submit the contact page inquiry.
    pub async fn submit_inquiry(&self, form: &mut ProjectInquiry) -> Outcome {
        if let Err(e) = form.validate() {
            tracing::debug!("inquiry form refused: {e}");
            return Outcome::Rejected(e);
        }

        let result = self.submitter.contact(&form.to_contact()).await;
        if self.report("inquiry", result, &INQUIRY) {
            form.clear();
            Outcome::Sent
        } else {
            Outcome::Failed
        }
    }

    /// Submit the footer newsletter form.
    pub async fn subscribe(&self, form: &mut NewsletterForm) -> Outcome {
        if let Err(e) = form.validate() {
            tracing::debug!("newsletter form refused: {e}");
            return Outcome::Rejected(e);
        }

        let result = self.submitter.newsletter(form).await;
        if self.report("newsletter", result, &NEWSLETTER) {
            form.clear();
            Outcome::Sent
        } else {
            Outcome::Failed
        }
    }

    /// Turn a submission result into a toast; true on success.
    fn report(&self, form: &str, result: Result<()>, notice: &Notice) -> bool {
        match result {
            Ok(()) => {
                self.notifier.push(Toast::success(notice.success));
                true
            }
            Err(e) => {
                tracing::warn!("{form} submission failed: {e}");
                self.notifier.push(Toast::error(notice.failure));
                false
            }
        }
    }
}

/// First required field that is blank.
fn require(fields: &[(&'static str, &str)]) -> Result<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(Error::MissingField(*name)),
        None => Ok(()),
    }
}

/// `local@domain` with both parts present and no whitespace.
fn check_email(email: &str) -> Result<()> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidField("email"))
    }
}
