//! Assessment creation: the configuration gathered by the assistant
//! conversation, and the creator that switches between chat, loading and
//! preview surfaces.

pub mod conversation;
pub mod loading;
pub mod manual;
pub mod questions;

use std::time::Instant;

use conversation::{Advance, Conversation, ConversationError};
use loading::LoadingStage;
use questions::Preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Mixed => "Mixed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionCount {
    Five,
    Ten,
    Fifteen,
    Twenty,
    TwentyFive,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 5] = [
        QuestionCount::Five,
        QuestionCount::Ten,
        QuestionCount::Fifteen,
        QuestionCount::Twenty,
        QuestionCount::TwentyFive,
    ];

    pub fn value(self) -> usize {
        match self {
            QuestionCount::Five => 5,
            QuestionCount::Ten => 10,
            QuestionCount::Fifteen => 15,
            QuestionCount::Twenty => 20,
            QuestionCount::TwentyFive => 25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionCount::Five => "5",
            QuestionCount::Ten => "10",
            QuestionCount::Fifteen => "15",
            QuestionCount::Twenty => "20",
            QuestionCount::TwentyFive => "25",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Mcqs,
    ShortAnswers,
    Both,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Mcqs,
        QuestionType::ShortAnswers,
        QuestionType::Both,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Mcqs => "MCQs",
            QuestionType::ShortAnswers => "Short Answers",
            QuestionType::Both => "Both",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// The four answers collected by the assistant, one per step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub topic: String,
    pub difficulty: Option<Difficulty>,
    pub question_count: Option<QuestionCount>,
    pub question_type: Option<QuestionType>,
}

impl Configuration {
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(Difficulty::label).unwrap_or("")
    }

    pub fn count_label(&self) -> &'static str {
        self.question_count.map(QuestionCount::label).unwrap_or("")
    }

    pub fn type_label(&self) -> &'static str {
        self.question_type.map(QuestionType::label).unwrap_or("")
    }

    /// Requested number of questions; zero until the count step is answered.
    pub fn requested_count(&self) -> usize {
        self.question_count.map(QuestionCount::value).unwrap_or(0)
    }
}

/// Which workspace surface is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Chat,
    Loading,
    Preview,
    Customizing,
}

/// Owns one assistant session: conversation, configuration and whichever
/// workspace surface is currently mounted.
#[derive(Debug)]
pub struct AssessmentCreator {
    mode: UiMode,
    config: Configuration,
    conversation: Conversation,
    loading: Option<LoadingStage>,
    preview: Option<Preview>,
}

impl AssessmentCreator {
    pub fn new(now: Instant) -> Self {
        Self {
            mode: UiMode::Chat,
            config: Configuration::default(),
            conversation: Conversation::new(now),
            loading: None,
            preview: None,
        }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn loading(&self) -> Option<&LoadingStage> {
        self.loading.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut Preview> {
        self.preview.as_mut()
    }

    /// Free text is only taken while chatting on the topic step.
    pub fn accepts_text(&self) -> bool {
        self.mode == UiMode::Chat && self.conversation.accepts_text()
    }

    /// Switches the visible surface without any transition checks. Entering
    /// a surface mounts fresh state for it; leaving drops it.
    pub fn set_mode(&mut self, mode: UiMode, now: Instant) {
        if mode == self.mode {
            return;
        }
        log::debug!("Assessment creator mode {:?} -> {:?}", self.mode, mode);

        match mode {
            UiMode::Chat => {
                self.loading = None;
                self.preview = None;
            }
            UiMode::Loading => {
                self.loading = Some(LoadingStage::new(now));
                self.preview = None;
            }
            UiMode::Preview | UiMode::Customizing => {
                self.loading = None;
                if self.preview.is_none() {
                    self.preview = Some(Preview::new(&self.config));
                }
            }
        }
        self.mode = mode;
    }

    pub fn submit_text(&mut self, text: &str, now: Instant) -> Result<Advance, ConversationError> {
        if self.mode != UiMode::Chat {
            return Err(ConversationError::TextNotExpected {
                step: self.conversation.step(),
            });
        }
        self.conversation.submit_text(&mut self.config, text, now)
    }

    pub fn select_chip(&mut self, chip: &str, now: Instant) -> Result<Advance, ConversationError> {
        let advance = self.conversation.select_chip(&mut self.config, chip, now)?;
        if advance == Advance::Proceed {
            log::info!(
                "Generating {} {} questions about '{}' ({})",
                self.config.count_label(),
                self.config.type_label(),
                self.config.topic,
                self.config.difficulty_label()
            );
            self.set_mode(UiMode::Loading, now);
        }
        Ok(advance)
    }

    /// Advances every timer that is due. Returns true when anything visible
    /// changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.conversation.poll(now);
        let finished_loading = self
            .loading
            .as_mut()
            .map(|stage| stage.poll(now))
            .unwrap_or(false);
        if finished_loading {
            self.set_mode(UiMode::Preview, now);
            changed = true;
        }
        changed
    }

    /// Earliest instant at which `poll` has something to do.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let chat = self.conversation.next_deadline();
        let loading = self.loading.as_ref().and_then(|s| s.next_deadline(now));
        match (chat, loading) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversation::TYPING_DELAY;
    use loading::{COMPLETION_DELAY, STAGE_INTERVAL};

    fn answered_creator(start: Instant) -> (AssessmentCreator, Instant) {
        let mut creator = AssessmentCreator::new(start);
        let mut now = start + TYPING_DELAY;
        creator.poll(now);
        creator.submit_text("Cybersecurity", now).unwrap();
        for chip in ["Medium", "5", "MCQs"] {
            now += TYPING_DELAY;
            creator.poll(now);
            creator.select_chip(chip, now).unwrap();
        }
        now += TYPING_DELAY;
        creator.poll(now);
        (creator, now)
    }

    #[test]
    fn test_labels_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(d.label()), Some(d));
        }
        for c in QuestionCount::ALL {
            assert_eq!(QuestionCount::from_label(c.label()), Some(c));
            assert_eq!(c.label(), c.value().to_string());
        }
        for t in QuestionType::ALL {
            assert_eq!(QuestionType::from_label(t.label()), Some(t));
        }
        assert_eq!(Difficulty::from_label("easy"), None);
    }

    #[test]
    fn test_only_proceed_enters_loading() {
        let start = Instant::now();
        let (mut creator, now) = answered_creator(start);
        assert_eq!(creator.mode(), UiMode::Chat);

        creator.select_chip("Review Settings", now).unwrap();
        assert_eq!(creator.mode(), UiMode::Chat);

        let now = now + TYPING_DELAY;
        creator.poll(now);
        assert_eq!(creator.select_chip("Yes, Proceed", now), Ok(Advance::Proceed));
        assert_eq!(creator.mode(), UiMode::Loading);
        assert!(creator.loading().is_some());
    }

    #[test]
    fn test_loading_completion_mounts_preview() {
        let start = Instant::now();
        let (mut creator, now) = answered_creator(start);
        creator.select_chip("Yes, Proceed", now).unwrap();

        let done = now + STAGE_INTERVAL * 4 + COMPLETION_DELAY;
        creator.poll(done - std::time::Duration::from_millis(1));
        assert_eq!(creator.mode(), UiMode::Loading);

        creator.poll(done);
        assert_eq!(creator.mode(), UiMode::Preview);
        assert!(creator.loading().is_none());
        let preview = creator.preview().unwrap();
        assert_eq!(preview.questions().len(), 5);
    }

    #[test]
    fn test_set_mode_is_unguarded() {
        let now = Instant::now();
        let mut creator = AssessmentCreator::new(now);
        creator.set_mode(UiMode::Customizing, now);
        assert_eq!(creator.mode(), UiMode::Customizing);
        // Nothing answered yet, so the preview slices zero questions.
        assert!(creator.preview().unwrap().questions().is_empty());

        creator.set_mode(UiMode::Chat, now);
        assert!(creator.preview().is_none());
    }

    #[test]
    fn test_preview_survives_customize_round_trip() {
        let now = Instant::now();
        let (mut creator, now) = answered_creator(now);
        creator.set_mode(UiMode::Preview, now);
        creator
            .preview_mut()
            .unwrap()
            .update_question_text("1", "Edited")
            .unwrap();

        creator.set_mode(UiMode::Customizing, now);
        creator.set_mode(UiMode::Preview, now);
        assert_eq!(creator.preview().unwrap().questions()[0].text, "Edited");
    }

    #[test]
    fn test_text_rejected_outside_chat() {
        let now = Instant::now();
        let mut creator = AssessmentCreator::new(now);
        creator.set_mode(UiMode::Loading, now);
        assert!(!creator.accepts_text());
        assert!(creator.submit_text("Networking", now).is_err());
        assert_eq!(creator.config().topic, "");
    }

    #[test]
    fn test_text_input_offered_only_for_topic() {
        let now = Instant::now();
        let mut creator = AssessmentCreator::new(now);
        assert!(creator.accepts_text());
        creator.submit_text("Networking", now).unwrap();
        assert!(!creator.accepts_text());
    }

    #[test]
    fn test_next_deadline_prefers_earliest() {
        let start = Instant::now();
        let creator = AssessmentCreator::new(start);
        assert_eq!(creator.next_deadline(start), Some(start + TYPING_DELAY));
    }
}
