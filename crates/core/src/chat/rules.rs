//! Keyword rules that pick a canned reply for free-text input.

use serde::{Deserialize, Serialize};

/// Reply used when no keyword matches.
pub const DEFAULT_REPLY: &str = "Thank you for your message! Our team will get back to you shortly. In the meantime, feel free to explore our services or contact us directly at contact@DesignDynasty.com";

/// A topic keyword and its canned reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseRule {
    /// Lowercase topic token matched as a substring.
    pub keyword: String,
    /// Reply sent when the keyword matches.
    pub reply: String,
}

impl ResponseRule {
    /// Create a rule, lowercasing the keyword.
    pub fn new(keyword: impl AsRef<str>, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.as_ref().trim().to_lowercase(),
            reply: reply.into(),
        }
    }
}

/// Ordered keyword rules plus the fallback reply.
///
/// Rules are tried in declaration order and the first keyword contained in
/// the input wins, so more specific topics belong earlier in the list.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ResponseRule>,
    default_reply: String,
}

impl RuleTable {
    /// Build a table from rules in priority order.
    ///
    /// Keywords are normalized to lowercase; rules with an empty keyword are
    /// dropped since they would match every input.
    pub fn new(
        rules: impl IntoIterator<Item = ResponseRule>,
        default_reply: impl Into<String>,
    ) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| ResponseRule::new(&rule.keyword, rule.reply))
            .filter(|rule| {
                if rule.keyword.is_empty() {
                    tracing::warn!("dropping chat rule with empty keyword");
                }
                !rule.keyword.is_empty()
            })
            .collect();

        Self {
            rules,
            default_reply: default_reply.into(),
        }
    }

    /// Pick the reply for `text`.
    pub fn lookup(&self, text: &str) -> &str {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lower.contains(rule.keyword.as_str()))
            .map_or(self.default_reply.as_str(), |rule| rule.reply.as_str())
    }

    /// The configured rules in priority order.
    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    /// The fallback reply.
    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(default_rules(), DEFAULT_REPLY)
    }
}

/// The built-in topics.
pub fn default_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule::new(
            "web development",
            "Our web development services include custom websites, web applications, and e-commerce solutions. Would you like to schedule a consultation?",
        ),
        ResponseRule::new(
            "pricing",
            "We offer flexible pricing plans starting from $999. Our Business plan at $2,999 is most popular. Would you like detailed pricing information?",
        ),
        ResponseRule::new(
            "portfolio",
            "You can view our latest projects in the portfolio section above. We've worked with 200+ clients across various industries.",
        ),
    ]
}
