//! Sample questions and the editable preview built from them.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::Configuration;

/// Minutes budgeted per question when estimating duration.
const MINUTES_PER_QUESTION: f32 = 1.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [String; 4],
    correct: usize,
    pub explanation: Option<String>,
}

impl Question {
    fn sample(
        id: &str,
        text: &str,
        options: [&str; 4],
        correct: usize,
        explanation: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            options: options.map(String::from),
            correct,
            explanation: explanation.map(String::from),
        }
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Text of the option marked correct.
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct]
    }
}

static SAMPLE_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::sample(
            "1",
            "What is the main goal of cybersecurity?",
            [
                "Protecting digital assets",
                "Securing networks only",
                "Preventing all attacks",
                "All of the above",
            ],
            3,
            Some("Cybersecurity encompasses protecting all digital assets, securing networks, and preventing various types of attacks."),
        ),
        Question::sample(
            "2",
            "Which of the following is considered the weakest link in cybersecurity?",
            [
                "Outdated software",
                "Human error",
                "Weak passwords",
                "Unpatched systems",
            ],
            1,
            Some("While all options are security risks, human error is often cited as the weakest link in cybersecurity."),
        ),
        Question::sample(
            "3",
            "What does the principle of \"least privilege\" mean in cybersecurity?",
            [
                "Giving users maximum access for convenience",
                "Providing users only the minimum access needed to perform their job",
                "Restricting all access to administrators only",
                "Allowing full access during business hours only",
            ],
            1,
            None,
        ),
        Question::sample(
            "4",
            "Which type of attack uses deceptive emails to trick users into revealing sensitive information?",
            ["Malware", "Phishing", "DDoS", "SQL Injection"],
            1,
            None,
        ),
        Question::sample(
            "5",
            "What is two-factor authentication (2FA)?",
            [
                "Using two different passwords",
                "Logging in twice",
                "Using two different verification methods",
                "Having two user accounts",
            ],
            2,
            None,
        ),
    ]
});

pub fn sample_questions() -> &'static [Question] {
    &SAMPLE_QUESTIONS
}

/// The first `min(n, available)` sample questions, in order.
pub fn slice_questions(n: usize) -> Vec<Question> {
    SAMPLE_QUESTIONS.iter().take(n).cloned().collect()
}

pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub fn estimated_minutes(count: usize) -> u32 {
    (count as f32 * MINUTES_PER_QUESTION).ceil() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no question with id '{0}'")]
    UnknownQuestion(String),
    #[error("option {index} is out of range (question has {len})")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("operation does not apply to this question kind")]
    WrongKind,
}

/// Local edit buffer over the sliced sample questions.
#[derive(Debug, Clone)]
pub struct Preview {
    config: Configuration,
    questions: Vec<Question>,
    selected: HashSet<String>,
    show_explanations: bool,
}

impl Preview {
    pub fn new(config: &Configuration) -> Self {
        Self {
            config: config.clone(),
            questions: slice_questions(config.requested_count()),
            selected: HashSet::new(),
            show_explanations: false,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn summary(&self) -> String {
        format!("{} questions generated", self.questions.len())
    }

    pub fn estimated_minutes(&self) -> u32 {
        estimated_minutes(self.questions.len())
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn show_explanations(&self) -> bool {
        self.show_explanations
    }

    pub fn toggle_explanations(&mut self) {
        self.show_explanations = !self.show_explanations;
    }

    pub fn update_question_text(&mut self, id: &str, text: &str) -> Result<(), EditError> {
        self.question_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Rewrites one option. The correct answer is tracked by position, so
    /// it follows the new text when this option was the correct one.
    pub fn update_option(&mut self, id: &str, index: usize, text: &str) -> Result<(), EditError> {
        let question = self.question_mut(id)?;
        let len = question.options.len();
        let option = question
            .options
            .get_mut(index)
            .ok_or(EditError::OptionOutOfRange { index, len })?;
        *option = text.to_string();
        Ok(())
    }

    pub fn set_correct_answer(&mut self, id: &str, index: usize) -> Result<(), EditError> {
        let question = self.question_mut(id)?;
        let len = question.options.len();
        if index >= len {
            return Err(EditError::OptionOutOfRange { index, len });
        }
        question.correct = index;
        Ok(())
    }

    /// An empty string clears the explanation.
    pub fn update_explanation(&mut self, id: &str, text: &str) -> Result<(), EditError> {
        let question = self.question_mut(id)?;
        question.explanation = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        Ok(())
    }

    fn question_mut(&mut self, id: &str) -> Result<&mut Question, EditError> {
        self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| EditError::UnknownQuestion(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QuestionCount;

    fn preview_with(count: QuestionCount) -> Preview {
        let config = Configuration {
            topic: "Cybersecurity".to_string(),
            question_count: Some(count),
            ..Configuration::default()
        };
        Preview::new(&config)
    }

    #[test]
    fn test_slice_is_bounded_and_ordered() {
        for n in [0, 1, 3, 5, 10, 25] {
            let slice = slice_questions(n);
            assert_eq!(slice.len(), n.min(5));
            assert_eq!(slice.as_slice(), &sample_questions()[..slice.len()]);
        }
    }

    #[test]
    fn test_samples_have_valid_answers() {
        for q in sample_questions() {
            assert!(q.correct_index() < q.options.len(), "question {} has no answer", q.id);
        }
        assert_eq!(sample_questions()[3].correct_answer(), "Phishing");
    }

    #[test]
    fn test_letters_and_minutes() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(estimated_minutes(5), 8);
        assert_eq!(estimated_minutes(10), 15);
        assert_eq!(estimated_minutes(0), 0);
    }

    #[test]
    fn test_edit_touches_only_target() {
        let mut preview = preview_with(QuestionCount::Ten);
        let before = preview.questions().to_vec();

        preview.update_option("2", 0, "Legacy software").unwrap();
        preview.set_correct_answer("2", 0).unwrap();

        for (old, new) in before.iter().zip(preview.questions()) {
            if old.id == "2" {
                assert_eq!(new.options[0], "Legacy software");
                assert_eq!(new.correct_answer(), "Legacy software");
                assert_eq!(new.options[1..], old.options[1..]);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_editing_correct_option_moves_answer() {
        let mut preview = preview_with(QuestionCount::Five);
        preview.update_option("4", 1, "Spear phishing").unwrap();
        let q = &preview.questions()[3];
        assert_eq!(q.correct_answer(), "Spear phishing");
        assert_eq!(q.correct_index(), 1);
    }

    #[test]
    fn test_duplicate_option_text_keeps_answer_in_place() {
        let mut preview = preview_with(QuestionCount::Five);
        preview.update_option("4", 1, "").unwrap();
        preview.update_option("4", 2, "").unwrap();
        preview.update_option("4", 2, "DDoS").unwrap();

        let q = &preview.questions()[3];
        assert_eq!(q.options, ["Malware", "", "DDoS", "SQL Injection"]);
        assert_eq!(q.correct_index(), 1);
        assert_eq!(q.correct_answer(), "");

        preview.update_option("4", 1, "Phishing").unwrap();
        assert_eq!(preview.questions()[3].correct_answer(), "Phishing");
    }

    #[test]
    fn test_invalid_edits_change_nothing() {
        let mut preview = preview_with(QuestionCount::Five);
        let before = preview.questions().to_vec();

        assert_eq!(
            preview.update_question_text("9", "x"),
            Err(EditError::UnknownQuestion("9".to_string()))
        );
        assert_eq!(
            preview.update_option("1", 4, "x"),
            Err(EditError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert!(preview.set_correct_answer("1", 7).is_err());
        assert_eq!(preview.questions(), before.as_slice());
    }

    #[test]
    fn test_selection_and_explanations_toggle() {
        let mut preview = preview_with(QuestionCount::Five);
        preview.toggle_selection("1");
        preview.toggle_selection("3");
        preview.toggle_selection("1");
        assert!(!preview.is_selected("1"));
        assert!(preview.is_selected("3"));
        assert_eq!(preview.selected_count(), 1);

        assert!(!preview.show_explanations());
        preview.toggle_explanations();
        assert!(preview.show_explanations());
    }

    #[test]
    fn test_clearing_explanation() {
        let mut preview = preview_with(QuestionCount::Five);
        preview.update_explanation("1", "").unwrap();
        assert_eq!(preview.questions()[0].explanation, None);
        preview.update_explanation("3", "Need to know").unwrap();
        assert_eq!(
            preview.questions()[2].explanation.as_deref(),
            Some("Need to know")
        );
        assert_eq!(preview.summary(), "5 questions generated");
    }
}
