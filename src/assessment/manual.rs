//! Hand-built assessment form state.

use super::questions::{option_letter, EditError};

pub const CATEGORY_OPTIONS: [(&str, &str); 5] = [
    ("programming", "Programming"),
    ("cybersecurity", "Cybersecurity"),
    ("data-science", "Data Science"),
    ("project-management", "Project Management"),
    ("marketing", "Marketing"),
];

pub const DIFFICULTY_OPTIONS: [(&str, &str); 3] =
    [("easy", "Easy"), ("medium", "Medium"), ("hard", "Hard")];

pub fn category_label(value: &str) -> &str {
    CATEGORY_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    MultipleChoice,
    ShortAnswer,
    Essay,
}

impl KindTag {
    pub const ALL: [KindTag; 3] = [KindTag::MultipleChoice, KindTag::ShortAnswer, KindTag::Essay];

    pub fn label(self) -> &'static str {
        match self {
            KindTag::MultipleChoice => "Multiple Choice",
            KindTag::ShortAnswer => "Short Answer",
            KindTag::Essay => "Essay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice { options: [String; 4], correct: usize },
    ShortAnswer { sample_answer: String },
    Essay { rubric: String },
}

impl QuestionKind {
    pub fn tag(&self) -> KindTag {
        match self {
            QuestionKind::MultipleChoice { .. } => KindTag::MultipleChoice,
            QuestionKind::ShortAnswer { .. } => KindTag::ShortAnswer,
            QuestionKind::Essay { .. } => KindTag::Essay,
        }
    }

    fn empty_choice() -> Self {
        QuestionKind::MultipleChoice {
            options: Default::default(),
            correct: 0,
        }
    }

    fn reference_text(&self) -> Option<&str> {
        match self {
            QuestionKind::MultipleChoice { .. } => None,
            QuestionKind::ShortAnswer { sample_answer } => Some(sample_answer),
            QuestionKind::Essay { rubric } => Some(rubric),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualQuestion {
    pub id: u64,
    pub text: String,
    pub points: u32,
    pub kind: QuestionKind,
}

impl ManualQuestion {
    pub fn points_label(&self) -> String {
        if self.points == 1 {
            "1 pt".to_string()
        } else {
            format!("{} pts", self.points)
        }
    }
}

/// What `save` hands back to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAssessment {
    pub title: String,
    pub category: String,
    pub questions: usize,
    pub total_points: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ManualAssessment {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub time_limit: String,
    pub passing_score: String,
    pub instructions: String,
    questions: Vec<ManualQuestion>,
    next_id: u64,
}

impl ManualAssessment {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[ManualQuestion] {
        &self.questions
    }

    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Appends an empty multiple-choice question worth one point.
    pub fn add_question(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.questions.push(ManualQuestion {
            id,
            text: String::new(),
            points: 1,
            kind: QuestionKind::empty_choice(),
        });
        id
    }

    pub fn remove_question(&mut self, id: u64) -> Result<(), EditError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| EditError::UnknownQuestion(id.to_string()))?;
        self.questions.remove(index);
        Ok(())
    }

    pub fn update_question_text(&mut self, id: u64, text: &str) -> Result<(), EditError> {
        self.question_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Zero is raised to one.
    pub fn set_points(&mut self, id: u64, points: u32) -> Result<(), EditError> {
        self.question_mut(id)?.points = points.max(1);
        Ok(())
    }

    /// Changes the question kind. Short answer and essay share their
    /// reference text; switching to multiple choice starts from four empty
    /// options.
    pub fn set_kind(&mut self, id: u64, tag: KindTag) -> Result<(), EditError> {
        let question = self.question_mut(id)?;
        if question.kind.tag() == tag {
            return Ok(());
        }
        let carried = question
            .kind
            .reference_text()
            .unwrap_or_default()
            .to_string();
        question.kind = match tag {
            KindTag::MultipleChoice => QuestionKind::empty_choice(),
            KindTag::ShortAnswer => QuestionKind::ShortAnswer {
                sample_answer: carried,
            },
            KindTag::Essay => QuestionKind::Essay { rubric: carried },
        };
        Ok(())
    }

    pub fn update_option(&mut self, id: u64, index: usize, text: &str) -> Result<(), EditError> {
        match &mut self.question_mut(id)?.kind {
            QuestionKind::MultipleChoice { options, .. } => {
                let len = options.len();
                let option = options
                    .get_mut(index)
                    .ok_or(EditError::OptionOutOfRange { index, len })?;
                *option = text.to_string();
                Ok(())
            }
            _ => Err(EditError::WrongKind),
        }
    }

    pub fn set_correct_option(&mut self, id: u64, index: usize) -> Result<(), EditError> {
        match &mut self.question_mut(id)?.kind {
            QuestionKind::MultipleChoice { options, correct } => {
                if index >= options.len() {
                    return Err(EditError::OptionOutOfRange {
                        index,
                        len: options.len(),
                    });
                }
                *correct = index;
                Ok(())
            }
            _ => Err(EditError::WrongKind),
        }
    }

    /// Sample answer for short answers, rubric for essays.
    pub fn set_reference_answer(&mut self, id: u64, text: &str) -> Result<(), EditError> {
        match &mut self.question_mut(id)?.kind {
            QuestionKind::ShortAnswer { sample_answer } => *sample_answer = text.to_string(),
            QuestionKind::Essay { rubric } => *rubric = text.to_string(),
            QuestionKind::MultipleChoice { .. } => return Err(EditError::WrongKind),
        }
        Ok(())
    }

    pub fn save(&self) -> SavedAssessment {
        let title = if self.title.trim().is_empty() {
            "Untitled Assessment".to_string()
        } else {
            self.title.trim().to_string()
        };
        let saved = SavedAssessment {
            title,
            category: category_label(&self.category).to_string(),
            questions: self.questions.len(),
            total_points: self.total_points(),
        };
        log::info!(
            "Saved manual assessment '{}' ({} questions, {} points)",
            saved.title,
            saved.questions,
            saved.total_points
        );
        saved
    }

    /// Plain-text rendering used by the preview window and the terminal.
    pub fn preview_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, q) in self.questions.iter().enumerate() {
            lines.push(format!("Question {} ({}): {}", i + 1, q.points_label(), q.text));
            if let QuestionKind::MultipleChoice { options, correct } = &q.kind {
                for (j, option) in options.iter().enumerate() {
                    let mark = if j == *correct { " ✓" } else { "" };
                    lines.push(format!("  {}) {}{}", option_letter(j), option, mark));
                }
            }
        }
        lines
    }

    fn question_mut(&mut self, id: u64) -> Result<&mut ManualQuestion, EditError> {
        self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| EditError::UnknownQuestion(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_question_defaults() {
        let mut form = ManualAssessment::new();
        let id = form.add_question();
        let q = &form.questions()[0];
        assert_eq!(q.id, id);
        assert_eq!(q.points, 1);
        assert_eq!(q.kind, QuestionKind::empty_choice());
        assert_ne!(form.add_question(), id);
    }

    #[test]
    fn test_edits_touch_only_target() {
        let mut form = ManualAssessment::new();
        let a = form.add_question();
        let b = form.add_question();
        let untouched = form.questions()[0].clone();

        form.update_question_text(b, "Explain TCP").unwrap();
        form.update_option(b, 2, "SYN").unwrap();
        form.set_correct_option(b, 2).unwrap();
        form.set_points(b, 3).unwrap();

        assert_eq!(form.questions()[0], untouched);
        assert_eq!(form.questions()[0].id, a);
        let q = &form.questions()[1];
        assert_eq!(q.text, "Explain TCP");
        assert_eq!(q.points, 3);
        assert!(matches!(&q.kind, QuestionKind::MultipleChoice { options, correct: 2 } if options[2] == "SYN"));
    }

    #[test]
    fn test_points_floor_at_one() {
        let mut form = ManualAssessment::new();
        let id = form.add_question();
        form.set_points(id, 0).unwrap();
        assert_eq!(form.questions()[0].points, 1);
    }

    #[test]
    fn test_kind_switch_carries_reference_text() {
        let mut form = ManualAssessment::new();
        let id = form.add_question();
        form.set_kind(id, KindTag::ShortAnswer).unwrap();
        form.set_reference_answer(id, "Three-way handshake").unwrap();
        form.set_kind(id, KindTag::Essay).unwrap();
        assert_eq!(
            form.questions()[0].kind,
            QuestionKind::Essay {
                rubric: "Three-way handshake".to_string()
            }
        );

        form.set_kind(id, KindTag::MultipleChoice).unwrap();
        assert_eq!(form.questions()[0].kind, QuestionKind::empty_choice());
    }

    #[test]
    fn test_wrong_kind_and_range_errors() {
        let mut form = ManualAssessment::new();
        let id = form.add_question();
        assert_eq!(form.set_reference_answer(id, "x"), Err(EditError::WrongKind));
        assert_eq!(
            form.set_correct_option(id, 4),
            Err(EditError::OptionOutOfRange { index: 4, len: 4 })
        );
        form.set_kind(id, KindTag::Essay).unwrap();
        assert_eq!(form.update_option(id, 0, "x"), Err(EditError::WrongKind));
        assert!(form.update_question_text(99, "x").is_err());
    }

    #[test]
    fn test_remove_question() {
        let mut form = ManualAssessment::new();
        let a = form.add_question();
        let b = form.add_question();
        let c = form.add_question();
        form.remove_question(b).unwrap();
        let ids: Vec<u64> = form.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, [a, c]);
        assert!(form.remove_question(b).is_err());
    }

    #[test]
    fn test_save_summary() {
        let mut form = ManualAssessment::new();
        form.category = "data-science".to_string();
        let a = form.add_question();
        form.add_question();
        form.set_points(a, 4).unwrap();

        let saved = form.save();
        assert_eq!(saved.title, "Untitled Assessment");
        assert_eq!(saved.category, "Data Science");
        assert_eq!(saved.questions, 2);
        assert_eq!(saved.total_points, 5);
    }

    #[test]
    fn test_preview_marks_correct_option() {
        let mut form = ManualAssessment::new();
        let id = form.add_question();
        form.update_question_text(id, "Pick B").unwrap();
        form.set_correct_option(id, 1).unwrap();
        let lines = form.preview_lines();
        assert_eq!(lines[0], "Question 1 (1 pt): Pick B");
        assert_eq!(lines[2], "  B)  ✓");
    }
}
