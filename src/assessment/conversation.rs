//! Scripted assistant conversation.
//!
//! The script is five fixed prompts. Each step accepts exactly one kind of
//! answer and writes one field of the [`Configuration`]. Replies from the
//! assistant are queued behind a short typing delay and surface on `poll`.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;

use super::{Configuration, Difficulty, QuestionCount, QuestionType};

/// How long the typing indicator shows before an assistant reply lands.
pub const TYPING_DELAY: Duration = Duration::from_millis(1000);

pub const GREETING: &str =
    "👋 Hi, I'm your Assessment Assistant. Tell me what assessment you'd like to create.";
pub const STARTING_GENERATION: &str = "🚀 Starting assessment generation...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Topic,
    Difficulty,
    QuestionCount,
    QuestionType,
    Confirm,
    Finished,
}

impl Step {
    pub fn index(self) -> usize {
        match self {
            Step::Topic => 0,
            Step::Difficulty => 1,
            Step::QuestionCount => 2,
            Step::QuestionType => 3,
            Step::Confirm => 4,
            Step::Finished => 5,
        }
    }

    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Step::Topic => Some(GREETING),
            Step::Difficulty => Some("Got it ✅. What difficulty level should the questions be?"),
            Step::QuestionCount => Some("Perfect! How many questions do you want?"),
            Step::QuestionType => Some("What type of questions would you prefer?"),
            Step::Confirm => Some(
                "Excellent! I have all the details. Do you want me to generate the assessment now?",
            ),
            Step::Finished => None,
        }
    }

    pub fn chips(self) -> Vec<&'static str> {
        match self {
            Step::Topic | Step::Finished => Vec::new(),
            Step::Difficulty => Difficulty::ALL.iter().map(|d| d.label()).collect(),
            Step::QuestionCount => QuestionCount::ALL.iter().map(|c| c.label()).collect(),
            Step::QuestionType => QuestionType::ALL.iter().map(|t| t.label()).collect(),
            Step::Confirm => ConfirmChoice::ALL.iter().map(|c| c.label()).collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Topic => "topic",
            Step::Difficulty => "difficulty",
            Step::QuestionCount => "question count",
            Step::QuestionType => "question type",
            Step::Confirm => "confirmation",
            Step::Finished => "finished",
        };
        write!(f, "{name} (step {})", self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Proceed,
    Review,
}

impl ConfirmChoice {
    pub const ALL: [ConfirmChoice; 2] = [ConfirmChoice::Proceed, ConfirmChoice::Review];

    pub fn label(self) -> &'static str {
        match self {
            ConfirmChoice::Proceed => "Yes, Proceed",
            ConfirmChoice::Review => "Review Settings",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Ai,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub chips: Vec<String>,
    pub is_typing: bool,
}

/// What an accepted answer did to the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the given step.
    Continued(Step),
    /// Confirmed; the host should start generating.
    Proceed,
    /// Asked to review; the step is unchanged.
    Reviewed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("message is empty")]
    EmptyInput,
    #[error("free text is not accepted at the {step}")]
    TextNotExpected { step: Step },
    #[error("'{chip}' is not an option at the {step}")]
    UnexpectedChip { step: Step, chip: String },
    #[error("the conversation has already finished")]
    Finished,
}

#[derive(Debug)]
struct PendingReply {
    due: Instant,
    placeholder_id: u64,
    text: String,
    chips: Vec<String>,
}

#[derive(Debug)]
pub struct Conversation {
    step: Step,
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
    next_id: u64,
}

impl Conversation {
    pub fn new(now: Instant) -> Self {
        let mut conversation = Self {
            step: Step::Topic,
            messages: Vec::new(),
            pending: VecDeque::new(),
            next_id: 1,
        };
        conversation.queue_reply(GREETING.to_string(), Vec::new(), now);
        conversation
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn accepts_text(&self) -> bool {
        self.step == Step::Topic
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Chips offered on the newest assistant message, once it has landed.
    pub fn active_chips(&self) -> &[String] {
        if self.is_typing() {
            return &[];
        }
        match self.messages.last() {
            Some(last) if last.author == Author::Ai => &last.chips,
            _ => &[],
        }
    }

    pub fn submit_text(
        &mut self,
        config: &mut Configuration,
        text: &str,
        now: Instant,
    ) -> Result<Advance, ConversationError> {
        if text.trim().is_empty() {
            return Err(ConversationError::EmptyInput);
        }
        if self.step != Step::Topic {
            return Err(ConversationError::TextNotExpected { step: self.step });
        }

        self.push_user(text);
        config.topic = text.to_string();
        Ok(self.advance_to(Step::Difficulty, now))
    }

    pub fn select_chip(
        &mut self,
        config: &mut Configuration,
        chip: &str,
        now: Instant,
    ) -> Result<Advance, ConversationError> {
        match self.step {
            Step::Topic => Err(self.unexpected(chip)),
            Step::Difficulty => {
                let difficulty = Difficulty::from_label(chip).ok_or_else(|| self.unexpected(chip))?;
                self.push_user(chip);
                config.difficulty = Some(difficulty);
                Ok(self.advance_to(Step::QuestionCount, now))
            }
            Step::QuestionCount => {
                let count = QuestionCount::from_label(chip).ok_or_else(|| self.unexpected(chip))?;
                self.push_user(chip);
                config.question_count = Some(count);
                Ok(self.advance_to(Step::QuestionType, now))
            }
            Step::QuestionType => {
                let kind = QuestionType::from_label(chip).ok_or_else(|| self.unexpected(chip))?;
                self.push_user(chip);
                config.question_type = Some(kind);
                Ok(self.advance_to(Step::Confirm, now))
            }
            Step::Confirm => {
                let choice = ConfirmChoice::from_label(chip).ok_or_else(|| self.unexpected(chip))?;
                self.push_user(chip);
                match choice {
                    ConfirmChoice::Proceed => {
                        self.step = Step::Finished;
                        self.queue_reply(STARTING_GENERATION.to_string(), Vec::new(), now);
                        Ok(Advance::Proceed)
                    }
                    ConfirmChoice::Review => {
                        let chips = Step::Confirm.chips().into_iter().map(String::from).collect();
                        self.queue_reply(review_summary(config), chips, now);
                        Ok(Advance::Reviewed)
                    }
                }
            }
            Step::Finished => Err(ConversationError::Finished),
        }
    }

    /// Lands every queued reply whose delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.pending.front().is_some_and(|p| p.due <= now) {
            let Some(reply) = self.pending.pop_front() else {
                break;
            };
            self.messages.retain(|m| m.id != reply.placeholder_id);
            let id = self.allocate_id();
            self.messages.push(Message {
                id,
                author: Author::Ai,
                text: reply.text,
                chips: reply.chips,
                is_typing: false,
            });
            changed = true;
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().map(|p| p.due)
    }

    fn advance_to(&mut self, next: Step, now: Instant) -> Advance {
        self.step = next;
        if let Some(prompt) = next.prompt() {
            let chips = next.chips().into_iter().map(String::from).collect();
            self.queue_reply(prompt.to_string(), chips, now);
        }
        Advance::Continued(next)
    }

    fn unexpected(&self, chip: &str) -> ConversationError {
        ConversationError::UnexpectedChip {
            step: self.step,
            chip: chip.to_string(),
        }
    }

    fn push_user(&mut self, text: &str) {
        let id = self.allocate_id();
        self.messages.push(Message {
            id,
            author: Author::User,
            text: text.to_string(),
            chips: Vec::new(),
            is_typing: false,
        });
    }

    fn queue_reply(&mut self, text: String, chips: Vec<String>, now: Instant) {
        let placeholder_id = self.allocate_id();
        self.messages.push(Message {
            id: placeholder_id,
            author: Author::Ai,
            text: String::new(),
            chips: Vec::new(),
            is_typing: true,
        });
        self.pending.push_back(PendingReply {
            due: now + TYPING_DELAY,
            placeholder_id,
            text,
            chips,
        });
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn review_summary(config: &Configuration) -> String {
    format!(
        "Here are your settings:\n• Topic: {}\n• Difficulty: {}\n• Questions: {}\n• Type: {}\nShall I generate the assessment?",
        config.topic,
        config.difficulty_label(),
        config.count_label(),
        config.type_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        conversation: Conversation,
        config: Configuration,
        now: Instant,
    }

    impl Harness {
        fn new() -> Self {
            let now = Instant::now();
            let mut harness = Self {
                conversation: Conversation::new(now),
                config: Configuration::default(),
                now,
            };
            harness.settle();
            harness
        }

        fn settle(&mut self) {
            self.now += TYPING_DELAY;
            self.conversation.poll(self.now);
        }

        fn text(&mut self, text: &str) -> Result<Advance, ConversationError> {
            self.conversation.submit_text(&mut self.config, text, self.now)
        }

        fn chip(&mut self, chip: &str) -> Result<Advance, ConversationError> {
            self.conversation.select_chip(&mut self.config, chip, self.now)
        }
    }

    #[test]
    fn test_greeting_arrives_after_typing_delay() {
        let start = Instant::now();
        let mut conversation = Conversation::new(start);
        assert_eq!(conversation.messages().len(), 1);
        assert!(conversation.messages()[0].is_typing);
        assert_eq!(conversation.next_deadline(), Some(start + TYPING_DELAY));

        assert!(!conversation.poll(start + Duration::from_millis(999)));
        assert!(conversation.poll(start + TYPING_DELAY));

        let messages = conversation.messages();
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].is_typing);
        assert_eq!(messages[0].text, GREETING);
        assert!(messages[0].chips.is_empty());
        assert_eq!(conversation.next_deadline(), None);
    }

    #[test]
    fn test_each_step_sets_one_field_and_advances_by_one() {
        let mut h = Harness::new();

        let before = h.config.clone();
        assert_eq!(h.text("Cybersecurity"), Ok(Advance::Continued(Step::Difficulty)));
        assert_eq!(h.conversation.step().index(), 1);
        assert_eq!(
            h.config,
            Configuration {
                topic: "Cybersecurity".to_string(),
                ..before
            }
        );
        h.settle();

        let before = h.config.clone();
        h.chip("Hard").unwrap();
        assert_eq!(h.conversation.step().index(), 2);
        assert_eq!(
            h.config,
            Configuration {
                difficulty: Some(Difficulty::Hard),
                ..before
            }
        );
        h.settle();

        let before = h.config.clone();
        h.chip("15").unwrap();
        assert_eq!(h.conversation.step().index(), 3);
        assert_eq!(
            h.config,
            Configuration {
                question_count: Some(QuestionCount::Fifteen),
                ..before
            }
        );
        h.settle();

        let before = h.config.clone();
        h.chip("Short Answers").unwrap();
        assert_eq!(h.conversation.step().index(), 4);
        assert_eq!(
            h.config,
            Configuration {
                question_type: Some(QuestionType::ShortAnswers),
                ..before
            }
        );
        h.settle();

        let before = h.config.clone();
        assert_eq!(h.chip("Yes, Proceed"), Ok(Advance::Proceed));
        assert_eq!(h.conversation.step().index(), 5);
        assert_eq!(h.config, before);
    }

    #[test]
    fn test_topic_is_stored_verbatim() {
        let mut h = Harness::new();
        h.text("  Network basics ").unwrap();
        assert_eq!(h.config.topic, "  Network basics ");
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let mut h = Harness::new();
        assert_eq!(h.text("   "), Err(ConversationError::EmptyInput));
        assert_eq!(h.conversation.step(), Step::Topic);
        assert_eq!(h.conversation.messages().len(), 1);
    }

    #[test]
    fn test_text_after_topic_changes_nothing() {
        let mut h = Harness::new();
        h.text("Databases").unwrap();
        h.settle();
        let messages = h.conversation.messages().to_vec();
        let config = h.config.clone();

        assert_eq!(
            h.text("Medium please"),
            Err(ConversationError::TextNotExpected {
                step: Step::Difficulty
            })
        );
        assert_eq!(h.conversation.messages(), messages.as_slice());
        assert_eq!(h.config, config);
        assert_eq!(h.conversation.step(), Step::Difficulty);
    }

    #[test]
    fn test_mismatched_chip_changes_nothing() {
        let mut h = Harness::new();
        h.text("Databases").unwrap();
        h.settle();
        let messages = h.conversation.messages().to_vec();

        let err = h.chip("10").unwrap_err();
        assert_eq!(
            err,
            ConversationError::UnexpectedChip {
                step: Step::Difficulty,
                chip: "10".to_string()
            }
        );
        assert_eq!(h.conversation.messages(), messages.as_slice());
        assert_eq!(h.config.question_count, None);
        assert_eq!(h.conversation.step(), Step::Difficulty);
    }

    #[test]
    fn test_chip_at_topic_step_is_rejected() {
        let mut h = Harness::new();
        assert!(matches!(
            h.chip("Easy"),
            Err(ConversationError::UnexpectedChip {
                step: Step::Topic,
                ..
            })
        ));
        assert_eq!(h.config, Configuration::default());
    }

    #[test]
    fn test_review_repeats_confirmation() {
        let mut h = Harness::new();
        h.text("Algebra").unwrap();
        for chip in ["Easy", "5", "Both"] {
            h.settle();
            h.chip(chip).unwrap();
        }
        h.settle();

        assert_eq!(h.chip("Review Settings"), Ok(Advance::Reviewed));
        assert_eq!(h.conversation.step(), Step::Confirm);
        h.settle();

        let last = h.conversation.messages().last().unwrap();
        assert!(last.text.contains("Topic: Algebra"));
        assert!(last.text.contains("Type: Both"));
        assert_eq!(h.conversation.active_chips(), ["Yes, Proceed", "Review Settings"]);
    }

    #[test]
    fn test_finished_rejects_everything() {
        let mut h = Harness::new();
        h.text("Algebra").unwrap();
        for chip in ["Easy", "5", "Both", "Yes, Proceed"] {
            h.settle();
            h.chip(chip).unwrap();
        }
        h.settle();
        assert_eq!(h.chip("Yes, Proceed"), Err(ConversationError::Finished));
        assert_eq!(
            h.conversation.messages().last().unwrap().text,
            STARTING_GENERATION
        );
    }

    #[test]
    fn test_chips_hidden_while_typing() {
        let mut h = Harness::new();
        h.text("Algebra").unwrap();
        assert!(h.conversation.is_typing());
        assert!(h.conversation.active_chips().is_empty());

        let placeholder = h.conversation.messages().last().unwrap();
        assert!(placeholder.is_typing);
        assert_eq!(placeholder.author, Author::Ai);

        h.settle();
        assert_eq!(h.conversation.active_chips(), ["Easy", "Medium", "Hard", "Mixed"]);
        assert!(h.conversation.messages().iter().all(|m| !m.is_typing));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut h = Harness::new();
        h.text("Algebra").unwrap();
        h.settle();
        h.chip("Easy").unwrap();
        h.settle();

        let mut ids: Vec<u64> = h.conversation.messages().iter().map(|m| m.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}
