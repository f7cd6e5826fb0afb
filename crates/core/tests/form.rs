//! Tests for form validation and the submission flow.

use dynasty_core::{
    ContactForm, Error, NewsletterForm, Outcome, ProjectInquiry, Result, SiteContext, Submitter,
    Variant, form, utils::slugify,
};
use std::sync::Mutex;

/// Records requests and answers with a fixed result.
#[derive(Default)]
struct Recorder {
    fail: bool,
    contacts: Mutex<Vec<ContactForm>>,
    newsletters: Mutex<Vec<NewsletterForm>>,
}

impl Recorder {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn answer(&self) -> Result<()> {
        if self.fail {
            Err(Error::Rejected { status: 500 })
        } else {
            Ok(())
        }
    }
}

impl Submitter for Recorder {
    async fn contact(&self, form: &ContactForm) -> Result<()> {
        self.contacts.lock().unwrap().push(form.clone());
        self.answer()
    }

    async fn newsletter(&self, form: &NewsletterForm) -> Result<()> {
        self.newsletters.lock().unwrap().push(form.clone());
        self.answer()
    }
}

fn filled_contact() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        service: "web-development".into(),
        message: "We need a new storefront.".into(),
    }
}

#[tokio::test]
async fn contact_success_clears_form() {
    let ctx = SiteContext::new(Recorder::default());
    let mut form = filled_contact();

    let outcome = ctx.submit_contact(&mut form).await;
    assert!(outcome.is_sent());
    assert_eq!(form, ContactForm::default());

    let toast = ctx.notifier.latest().unwrap();
    assert_eq!(toast.title, "Success!");
    assert_eq!(
        toast.description,
        "Thank you for your message! We will get back to you soon."
    );
    assert_eq!(toast.variant, Variant::Default);

    let sent = ctx.submitter.contacts.lock().unwrap();
    assert_eq!(sent.as_slice(), [filled_contact()]);
}

#[tokio::test]
async fn contact_failure_keeps_form() {
    let ctx = SiteContext::new(Recorder::failing());
    let mut form = filled_contact();

    let outcome = ctx.submit_contact(&mut form).await;
    assert!(matches!(outcome, Outcome::Failed));
    assert_eq!(form, filled_contact());

    let toast = ctx.notifier.latest().unwrap();
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Failed to send message. Please try again.");
    assert_eq!(toast.variant, Variant::Destructive);
}

#[tokio::test]
async fn incomplete_contact_is_not_sent() {
    let ctx = SiteContext::new(Recorder::default());
    let mut form = ContactForm {
        service: "   ".into(),
        ..filled_contact()
    };

    let outcome = ctx.submit_contact(&mut form).await;
    assert!(matches!(
        outcome,
        Outcome::Rejected(Error::MissingField("service"))
    ));
    assert!(ctx.submitter.contacts.lock().unwrap().is_empty());
    assert!(ctx.notifier.latest().is_none());
    assert_eq!(form.name, "Ada Lovelace");
}

#[tokio::test]
async fn newsletter_success_clears_email() {
    let ctx = SiteContext::new(Recorder::default());
    let mut form = NewsletterForm::new("reader@example.com");

    assert!(ctx.subscribe(&mut form).await.is_sent());
    assert!(form.email.is_empty());
    assert_eq!(
        ctx.notifier.latest().unwrap().description,
        "Thank you for subscribing to our newsletter!"
    );
}

#[tokio::test]
async fn newsletter_failure_keeps_email() {
    let ctx = SiteContext::new(Recorder::failing());
    let mut form = NewsletterForm::new("reader@example.com");

    let outcome = ctx.subscribe(&mut form).await;
    assert!(matches!(outcome, Outcome::Failed));
    assert_eq!(form.email, "reader@example.com");

    let toast = ctx.notifier.latest().unwrap();
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Failed to subscribe. Please try again.");
}

#[tokio::test]
async fn blank_newsletter_is_not_sent() {
    let ctx = SiteContext::new(Recorder::default());
    let mut form = NewsletterForm::default();
    let outcome = ctx.subscribe(&mut form).await;
    assert!(matches!(
        outcome,
        Outcome::Rejected(Error::MissingField("email"))
    ));
    assert!(ctx.submitter.newsletters.lock().unwrap().is_empty());
}

#[test]
fn malformed_email_is_invalid() {
    for email in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
        let form = NewsletterForm::new(email);
        assert!(
            matches!(form.validate(), Err(Error::InvalidField("email"))),
            "{email}"
        );
    }
    assert!(NewsletterForm::new("ada@example.com").validate().is_ok());
}

#[tokio::test]
async fn inquiry_folds_extra_fields_into_message() {
    let ctx = SiteContext::new(Recorder::default());
    let mut inquiry = ProjectInquiry {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        phone: "555-0100".into(),
        company: "Navy".into(),
        service: "brand-identity".into(),
        budget: "5k-10k".into(),
        timeline: "asap".into(),
        message: "New logo".into(),
    };

    assert!(ctx.submit_inquiry(&mut inquiry).await.is_sent());
    assert_eq!(inquiry, ProjectInquiry::default());
    assert_eq!(
        ctx.notifier.latest().unwrap().description,
        "Thank you for your message! We'll get back to you within 24 hours."
    );

    let sent = ctx.submitter.contacts.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].service, "brand-identity");
    assert_eq!(
        sent[0].message,
        "Phone: 555-0100\nCompany: Navy\nBudget: 5k-10k\nTimeline: asap\n\nMessage: New logo"
    );
}

#[tokio::test]
async fn inquiry_optional_fields_may_be_blank() {
    let ctx = SiteContext::new(Recorder::failing());
    let mut inquiry = ProjectInquiry {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        service: "other".into(),
        message: "Hello".into(),
        ..ProjectInquiry::default()
    };

    assert!(matches!(
        ctx.submit_inquiry(&mut inquiry).await,
        Outcome::Failed
    ));
    assert_eq!(inquiry.name, "Grace");
    assert_eq!(
        ctx.notifier.latest().unwrap().description,
        "Failed to send message. Please try again or contact us directly."
    );
}

#[tokio::test]
async fn resubmitting_sends_again() {
    let ctx = SiteContext::new(Recorder::failing());
    let mut form = filled_contact();
    ctx.submit_contact(&mut form).await;
    ctx.submit_contact(&mut form).await;
    assert_eq!(ctx.submitter.contacts.lock().unwrap().len(), 2);
}

#[test]
fn service_option_values() {
    let options = form::contact_service_options();
    assert_eq!(options.len(), 7);
    assert!(options.contains(&("mobile-app-development".to_owned(), "Mobile App Development")));
    assert!(options.contains(&("e-commerce-solutions".to_owned(), "E-commerce Solutions")));
    assert_eq!(slugify("Brand   Identity"), "brand-identity");
}
