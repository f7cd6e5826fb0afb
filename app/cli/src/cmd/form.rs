//! Contact, inquiry and newsletter commands.

use anyhow::Result;
use clap::Args;
use client::ApiClient;
use dcore::{
    ContactForm, NewsletterForm, Outcome, ProjectInquiry, SiteConfig, SiteContext,
};

/// Send the contact section form.
#[derive(Args, Debug)]
pub struct Contact {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Service slug, e.g. `web-development`.
    #[arg(long)]
    pub service: String,
    #[arg(long)]
    pub message: String,
    /// API base URL. Defaults to `api.base_url` from the config.
    #[arg(long)]
    pub api: Option<String>,
}

impl Contact {
    pub async fn run(self, config: &SiteConfig) -> Result<()> {
        let ctx = context(config, self.api.as_deref())?;
        let mut form = ContactForm {
            name: self.name,
            email: self.email,
            service: self.service,
            message: self.message,
        };
        let outcome = ctx.submit_contact(&mut form).await;
        report(&ctx, outcome)
    }
}

/// Send the contact page project inquiry.
#[derive(Args, Debug)]
pub struct Inquiry {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    /// Service slug, e.g. `ecommerce-solutions`.
    #[arg(long)]
    pub service: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    #[arg(long, default_value = "")]
    pub timeline: String,
    #[arg(long)]
    pub message: String,
    /// API base URL. Defaults to `api.base_url` from the config.
    #[arg(long)]
    pub api: Option<String>,
}

impl Inquiry {
    pub async fn run(self, config: &SiteConfig) -> Result<()> {
        let ctx = context(config, self.api.as_deref())?;
        let mut form = ProjectInquiry {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            service: self.service,
            budget: self.budget,
            timeline: self.timeline,
            message: self.message,
        };
        let outcome = ctx.submit_inquiry(&mut form).await;
        report(&ctx, outcome)
    }
}

/// Subscribe an email to the newsletter.
#[derive(Args, Debug)]
pub struct Subscribe {
    pub email: String,
    /// API base URL. Defaults to `api.base_url` from the config.
    #[arg(long)]
    pub api: Option<String>,
}

impl Subscribe {
    pub async fn run(self, config: &SiteConfig) -> Result<()> {
        let ctx = context(config, self.api.as_deref())?;
        let mut form = NewsletterForm::new(self.email);
        let outcome = ctx.subscribe(&mut form).await;
        report(&ctx, outcome)
    }
}

fn context(config: &SiteConfig, api: Option<&str>) -> Result<SiteContext<ApiClient>> {
    let base_url = api.unwrap_or(&config.api.base_url);
    let client = ApiClient::with_timeout(base_url, config.api.timeout())?;
    Ok(SiteContext::new(client))
}

/// Print the toast for a delivered or failed submission. A locally refused
/// form is an error since nothing was sent.
fn report(ctx: &SiteContext<ApiClient>, outcome: Outcome) -> Result<()> {
    if let Outcome::Rejected(e) = outcome {
        return Err(e.into());
    }
    if let Some(toast) = ctx.notifier.latest() {
        println!("{}: {}", toast.title, toast.description);
    }
    Ok(())
}
