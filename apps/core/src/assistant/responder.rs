//! Intent Responder - offline reply generation for the heritage assistant.
//!
//! Stages, first match wins:
//! 1. Direct knowledge match (substring or shared token with a curated key)
//! 2. Site keyword match (identifier or display name)
//! 3. Role-scoped rules
//! 4. General categorical rules (greeting, help, culture, history)
//! 5. Fallback
//!
//! Pure apart from the injected greeting picker; safe to share across tasks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use super::context::{ConversationContext, HistoryMessage, Role, MAX_HISTORY};
use super::intent::{self, AdminTopic, RoleIntent, Topic, VisitorTopic};
use super::knowledge::{KnowledgeEntry, SiteEntry, KNOWLEDGE_BASE, SITES, SITE_SUGGESTIONS};
use super::reply::ChatReply;

const GREETING_OPENERS: [&str; 3] = ["Hello!", "Hi there!", "Welcome!"];

const GREETING_BODY: &str = "I'm your EthioHeritage360 guide. I can tell you about Ethiopian \
                             heritage sites, their history and the living culture around them.";

const GREETING_SUGGESTIONS: &[&str] = &[
    "Tell me about Lalibela",
    "Explain the coffee ceremony",
    "Show me virtual tours",
];

const HELP_TEXT: &str = "I'm here to help! You can ask me about heritage sites such as Lalibela \
                         and Aksum, Ethiopian traditions and festivals, historic kingdoms, or \
                         how to use the tours and courses on EthioHeritage360.";

const HELP_SUGGESTIONS: &[&str] = &[
    "Tell me about Aksum",
    "Which festivals are celebrated in Ethiopia?",
    "Show me virtual tours",
];

const CULTURE_TEXT: &str = "Ethiopian culture is remarkably diverse, with more than 80 ethnic \
                            groups, each with its own languages, music, dances and cuisine. \
                            Signature traditions include the coffee ceremony, shared injera \
                            meals and festivals such as Timkat and Meskel.";

const CULTURE_SUGGESTIONS: &[&str] = &[
    "Tell me about the coffee ceremony",
    "Tell me about the Timkat festival",
    "Explain injera",
];

const HISTORY_TEXT: &str = "Ethiopia has one of the longest recorded histories in the world, \
                            from the Kingdom of D'mt and the Aksumite Empire to the Zagwe and \
                            Solomonic dynasties. Apart from a brief Italian occupation \
                            (1936-1941) it was never colonized.";

const HISTORY_SUGGESTIONS: &[&str] = &[
    "Tell me about Aksum",
    "Who built the Lalibela churches?",
    "Show me Gondar",
];

const FALLBACK_TEXT: &str = "That's an interesting question! I don't have a specific answer yet, \
                             but I can help you explore Ethiopian heritage sites, culture, history \
                             and museum collections. Try asking about a particular place or \
                             tradition.";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Tell me about Ethiopian heritage sites",
    "Tell me about Ethiopian traditions",
    "Show me virtual tours",
];

const ADMIN_ARTIFACT_TEXT: &str = "To add a new piece, open Artifact Management from your museum \
                                   dashboard and choose \"Add Artifact\". Fill in the name, \
                                   period, origin and description, attach high-resolution \
                                   images, then submit it for review.";

const ADMIN_ANALYTICS_TEXT: &str = "The Visitor Analytics panel on your dashboard shows daily \
                                    visits, popular exhibits and rental activity. Use the date \
                                    filters to compare periods and export reports as CSV.";

const ADMIN_STAFF_TEXT: &str = "Staff accounts live under Staff Management. From there you can \
                                invite new members, assign their permissions and review recent \
                                activity.";

const ADMIN_HELP_TEXT: &str = "As a museum administrator you can manage artifacts, review \
                               visitor analytics, handle rental requests and coordinate staff \
                               from your dashboard. What would you like to work on?";

const ADMIN_SUGGESTIONS: &[&str] = &[
    "How do I upload an artifact?",
    "Show visitor analytics",
    "How do I manage staff?",
];

const VISITOR_TOUR_TEXT: &str = "You can explore virtual tours from the Tours page or plan an \
                                 in-person visit with the interactive map. Each tour lists \
                                 opening hours, ticket prices and highlights.";

const VISITOR_LEARN_TEXT: &str = "The Learning Center offers free courses on Ethiopian history, \
                                  languages and cultural traditions. Enroll in a course to track \
                                  your progress and earn certificates.";

const VISITOR_COLLECTION_TEXT: &str = "Browse the digital collection to discover pieces from \
                                       museums across Ethiopia. Filter by region, period or \
                                       category and bookmark favorites to revisit later.";

const VISITOR_HELP_TEXT: &str = "I can help you find heritage sites, plan tours, discover museum \
                                 collections and start learning courses. Just ask about any \
                                 place or topic!";

const VISITOR_SUGGESTIONS: &[&str] = &[
    "Show me virtual tours",
    "Which courses can I take?",
    "Browse museum collections",
];

/// Source of the index used to pick a greeting variant.
pub trait VariantPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl VariantPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible sequence from a seed.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl VariantPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Always the same index (modulo `len`).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Matching stage that produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Knowledge,
    Site,
    Role,
    General,
    Fallback,
}

/// Offline responder over the static knowledge tables.
pub struct IntentResponder {
    picker: Box<dyn VariantPicker>,
}

impl Default for IntentResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentResponder {
    /// Responder with random greeting variants
    pub fn new() -> Self {
        Self::with_picker(ThreadRngPicker)
    }

    pub fn with_picker(picker: impl VariantPicker + 'static) -> Self {
        Self {
            picker: Box::new(picker),
        }
    }

    /// Produces a reply for `input`. Never fails: unmatched input gets the fallback reply.
    pub fn respond(&self, input: &str, role: Role, history: &[HistoryMessage]) -> ChatReply {
        self.respond_with_stage(input, role, history).0
    }

    /// Same as [`respond`](Self::respond), reading role and history from a context.
    pub fn respond_in(&self, input: &str, context: &ConversationContext) -> ChatReply {
        self.respond(input, context.role, &context.recent())
    }

    pub fn respond_with_stage(
        &self,
        input: &str,
        role: Role,
        history: &[HistoryMessage],
    ) -> (ChatReply, Stage) {
        let query = input.trim().to_lowercase();

        let (reply, stage) = if let Some(entry) = direct_match(&query) {
            (knowledge_reply(entry), Stage::Knowledge)
        } else if let Some(site) = site_match(&query) {
            (site_reply(site), Stage::Site)
        } else if let Some(role_intent) = intent::classify_for_role(role, &query) {
            (role_reply(role_intent), Stage::Role)
        } else if let Some(topic) = intent::classify_topic(&query) {
            (self.topic_reply(topic), Stage::General)
        } else {
            (ChatReply::new(FALLBACK_TEXT, FALLBACK_SUGGESTIONS), Stage::Fallback)
        };

        debug!(
            role = %role,
            history_len = history.len().min(MAX_HISTORY),
            stage = ?stage,
            "Local reply generated"
        );

        (reply, stage)
    }

    fn topic_reply(&self, topic: Topic) -> ChatReply {
        match topic {
            Topic::Greeting => {
                let opener = GREETING_OPENERS[self.picker.pick(GREETING_OPENERS.len())];
                ChatReply::new(format!("{} {}", opener, GREETING_BODY), GREETING_SUGGESTIONS)
            }
            Topic::Help => ChatReply::new(HELP_TEXT, HELP_SUGGESTIONS),
            Topic::Culture => ChatReply::new(CULTURE_TEXT, CULTURE_SUGGESTIONS),
            Topic::History => ChatReply::new(HISTORY_TEXT, HISTORY_SUGGESTIONS),
        }
    }
}

/// Substring match on the key, or any whitespace token shared with it.
///
/// Common words such as "is" match every key that contains them.
fn direct_match(query: &str) -> Option<&'static KnowledgeEntry> {
    let tokens: HashSet<&str> = query.split_whitespace().collect();
    KNOWLEDGE_BASE.iter().find(|entry| {
        query.contains(entry.key) || entry.key.split_whitespace().any(|word| tokens.contains(word))
    })
}

fn site_match(query: &str) -> Option<&'static SiteEntry> {
    SITES
        .iter()
        .find(|site| query.contains(site.id) || query.contains(&site.name.to_lowercase()))
}

fn knowledge_reply(entry: &KnowledgeEntry) -> ChatReply {
    ChatReply::new(entry.answer, entry.suggestions)
}

fn site_reply(site: &SiteEntry) -> ChatReply {
    let text = format!(
        "{} is {}. Located in {}, it's significant because {}. {}",
        site.name,
        site.description,
        site.location,
        site.significance,
        site.extra.text()
    );
    ChatReply::new(text.trim_end(), SITE_SUGGESTIONS)
}

fn role_reply(role_intent: RoleIntent) -> ChatReply {
    match role_intent {
        RoleIntent::Admin(AdminTopic::ArtifactUpload) => {
            ChatReply::new(ADMIN_ARTIFACT_TEXT, ADMIN_SUGGESTIONS)
        }
        RoleIntent::Admin(AdminTopic::VisitorAnalytics) => {
            ChatReply::new(ADMIN_ANALYTICS_TEXT, ADMIN_SUGGESTIONS)
        }
        RoleIntent::Admin(AdminTopic::StaffManagement) => {
            ChatReply::new(ADMIN_STAFF_TEXT, ADMIN_SUGGESTIONS)
        }
        RoleIntent::AdminHelp => ChatReply::new(ADMIN_HELP_TEXT, ADMIN_SUGGESTIONS),
        RoleIntent::Visitor(VisitorTopic::Tours) => {
            ChatReply::new(VISITOR_TOUR_TEXT, VISITOR_SUGGESTIONS)
        }
        RoleIntent::Visitor(VisitorTopic::Learning) => {
            ChatReply::new(VISITOR_LEARN_TEXT, VISITOR_SUGGESTIONS)
        }
        RoleIntent::Visitor(VisitorTopic::Collections) => {
            ChatReply::new(VISITOR_COLLECTION_TEXT, VISITOR_SUGGESTIONS)
        }
        RoleIntent::VisitorHelp => ChatReply::new(VISITOR_HELP_TEXT, VISITOR_SUGGESTIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_picker_wraps() {
        assert_eq!(FixedPicker(4).pick(3), 1);
        assert_eq!(FixedPicker(0).pick(3), 0);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let left: Vec<usize> = (0..8).map(|_| a.pick(3)).collect();
        let right: Vec<usize> = (0..8).map(|_| b.pick(3)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|i| *i < 3));
    }

    #[test]
    fn test_site_reply_without_extra_has_no_trailing_space() {
        let harar = SITES.iter().find(|s| s.id == "harar").unwrap();
        let reply = site_reply(harar);
        assert!(reply.text.ends_with("city of Islam."));
    }

    fn all_suggestions() -> Vec<&'static str> {
        let canned = [
            GREETING_SUGGESTIONS,
            HELP_SUGGESTIONS,
            CULTURE_SUGGESTIONS,
            HISTORY_SUGGESTIONS,
            FALLBACK_SUGGESTIONS,
            ADMIN_SUGGESTIONS,
            VISITOR_SUGGESTIONS,
            SITE_SUGGESTIONS,
        ];
        canned
            .into_iter()
            .chain(KNOWLEDGE_BASE.iter().map(|entry| entry.suggestions))
            .flatten()
            .copied()
            .collect()
    }

    #[test]
    fn test_suggestions_do_not_misroute_to_first_entry() {
        let responder = IntentResponder::with_picker(FixedPicker(0));
        let first = &KNOWLEDGE_BASE[0];

        for suggestion in all_suggestions() {
            if suggestion.to_lowercase().contains("lalibela") {
                continue;
            }
            let reply = responder.respond(suggestion, Role::Visitor, &[]);
            assert_ne!(
                reply.text, first.answer,
                "'{}' was answered with the '{}' entry",
                suggestion, first.key
            );
        }
    }

    #[test]
    fn test_suggestions_reach_their_entries() {
        let responder = IntentResponder::with_picker(FixedPicker(0));
        let expect_key = |input: &str, key: &str| {
            let (reply, stage) = responder.respond_with_stage(input, Role::Visitor, &[]);
            let entry = KNOWLEDGE_BASE.iter().find(|e| e.key == key).unwrap();
            assert_eq!(stage, Stage::Knowledge, "'{}'", input);
            assert_eq!(reply.text, entry.answer, "'{}'", input);
        };

        expect_key("Explain the coffee ceremony", "coffee ceremony");
        expect_key("Tell me about the Timkat festival", "timkat festival");
        expect_key("Where can I see the Timkat festival?", "timkat festival");
        expect_key("Explain injera", "injera");
        expect_key("Tell me about Meskel", "meskel celebration");
        expect_key("Which snacks come with the coffee ceremony?", "coffee ceremony");
        expect_key("Tell me about Lalibela", "what is lalibela");
    }

    #[test]
    fn test_stage_reporting() {
        let responder = IntentResponder::with_picker(FixedPicker(0));
        let (_, stage) = responder.respond_with_stage("injera", Role::Visitor, &[]);
        assert_eq!(stage, Stage::Knowledge);
        let (_, stage) = responder.respond_with_stage("gondar", Role::Visitor, &[]);
        assert_eq!(stage, Stage::Site);
        let (_, stage) = responder.respond_with_stage("", Role::Visitor, &[]);
        assert_eq!(stage, Stage::Fallback);
    }
}
