//! Rule-based topic detection using regex patterns.
//!
//! Rules are tried in a fixed priority order and the first match wins.
//! Greetings match whole words; every other rule is a plain substring match.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use super::context::Role;

/// Role-independent categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Help,
    Culture,
    History,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Topic::Greeting => "greeting",
            Topic::Help => "help",
            Topic::Culture => "culture",
            Topic::History => "history",
        };
        f.write_str(label)
    }
}

/// Museum administrator topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminTopic {
    ArtifactUpload,
    VisitorAnalytics,
    StaffManagement,
}

/// Visitor and registered user topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorTopic {
    Tours,
    Learning,
    Collections,
}

/// Outcome of the role-scoped stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleIntent {
    Admin(AdminTopic),
    AdminHelp,
    Visitor(VisitorTopic),
    VisitorHelp,
}

struct Rule<T> {
    topic: T,
    pattern: Regex,
}

/// Ordered list of rules; the first matching rule wins.
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T: Copy> RuleSet<T> {
    fn new(rules: Vec<(T, &str)>) -> Self {
        // NOTE: patterns are literals, so a failure here is a programming error
        let rules = rules
            .into_iter()
            .map(|(topic, source)| Rule {
                topic,
                pattern: Regex::new(source).expect("Invalid regex in rule set"),
            })
            .collect();
        Self { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.topic)
    }
}

impl<T: Copy + PartialEq> RuleSet<T> {
    /// Checks a single rule regardless of priority.
    pub fn matches(&self, topic: T, text: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.topic == topic && rule.pattern.is_match(text))
    }
}

static GENERAL_RULES: LazyLock<RuleSet<Topic>> = LazyLock::new(|| {
    RuleSet::new(vec![
        (Topic::Greeting, r"(?i)\b(hi|hello|hey|greetings)\b"),
        (Topic::Help, r"(?i)help|assist|guide|how"),
        (Topic::Culture, r"(?i)culture|tradition|custom|festival|food|music|dance"),
        (Topic::History, r"(?i)history|ancient|kingdom|empire|past"),
    ])
});

static ADMIN_RULES: LazyLock<RuleSet<AdminTopic>> = LazyLock::new(|| {
    RuleSet::new(vec![
        (AdminTopic::ArtifactUpload, r"(?i)upload|artifact"),
        (AdminTopic::VisitorAnalytics, r"(?i)visitor|analytics"),
        (AdminTopic::StaffManagement, r"(?i)staff|manage"),
    ])
});

static VISITOR_RULES: LazyLock<RuleSet<VisitorTopic>> = LazyLock::new(|| {
    RuleSet::new(vec![
        (VisitorTopic::Tours, r"(?i)tour|visit"),
        (VisitorTopic::Learning, r"(?i)learn|course|education"),
        (VisitorTopic::Collections, r"(?i)artifact|museum|collection"),
    ])
});

/// Role-independent classification.
pub fn classify_topic(text: &str) -> Option<Topic> {
    GENERAL_RULES.first_match(text)
}

/// True when the text asks for help in any form.
pub fn is_help_request(text: &str) -> bool {
    GENERAL_RULES.matches(Topic::Help, text)
}

/// Role-scoped classification.
///
/// The role's generic help reply is only chosen for help requests; anything
/// else is left to the general rules.
pub fn classify_for_role(role: Role, text: &str) -> Option<RoleIntent> {
    match role {
        Role::MuseumAdmin => ADMIN_RULES
            .first_match(text)
            .map(RoleIntent::Admin)
            .or_else(|| is_help_request(text).then_some(RoleIntent::AdminHelp)),
        Role::User | Role::Visitor => VISITOR_RULES
            .first_match(text)
            .map(RoleIntent::Visitor)
            .or_else(|| is_help_request(text).then_some(RoleIntent::VisitorHelp)),
        Role::Admin | Role::SuperAdmin => None,
    }
}
