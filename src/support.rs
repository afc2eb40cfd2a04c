//! State for the Support & Settings page: FAQ, contact form and the three
//! settings forms. None of it outlives the page.

use crate::assessment::{Difficulty, QuestionCount, QuestionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: [FaqItem; 5] = [
    FaqItem {
        question: "How do I create a new assessment?",
        answer: "You can create a new assessment by clicking the \"New Assessment\" button on the dashboard and choosing either manual creation or AI assistance.",
    },
    FaqItem {
        question: "Can I modify questions after creating an assessment?",
        answer: "Yes, you can edit questions at any time by going to the assessment preview and clicking the \"Customize\" button.",
    },
    FaqItem {
        question: "How do I export assessments to different formats?",
        answer: "After creating an assessment, you can use the export options to download as PDF, Word document, or export directly to supported LMS platforms.",
    },
    FaqItem {
        question: "Is there a limit to the number of questions per assessment?",
        answer: "There is no hard limit, but we recommend keeping assessments between 10-50 questions for optimal user experience.",
    },
    FaqItem {
        question: "How can I track student progress?",
        answer: "Use the Reports section to view detailed analytics including completion rates, average scores, and performance trends.",
    },
];

/// Accordion with at most one entry open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    expanded: Option<usize>,
}

impl FaqState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= FAQ_ITEMS.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Administrator,
    Instructor,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrator, Role::Instructor, Role::Student];

    pub fn label(self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: Role::Administrator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notifications {
    pub email_notifications: bool,
    pub assessment_reminders: bool,
    pub weekly_reports: bool,
    pub system_updates: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email_notifications: true,
            assessment_reminders: false,
            weekly_reports: true,
            system_updates: true,
        }
    }
}

impl Notifications {
    /// (label, hint, flag) rows in display order.
    pub fn rows_mut(&mut self) -> [(&'static str, &'static str, &mut bool); 4] {
        [
            ("Email Notifications", "Receive notifications via email", &mut self.email_notifications),
            ("Assessment Reminders", "Get reminded about upcoming assessments", &mut self.assessment_reminders),
            ("Weekly Reports", "Receive weekly performance summaries", &mut self.weekly_reports),
            ("System Updates", "Get notified about system updates", &mut self.system_updates),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentDefaults {
    pub difficulty: Difficulty,
    pub question_count: QuestionCount,
    pub question_type: QuestionType,
}

impl Default for AssessmentDefaults {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            question_count: QuestionCount::Ten,
            question_type: QuestionType::Mcqs,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Logs the message and clears the form. A blank message is not sent.
    pub fn send(&mut self) -> bool {
        if self.message.trim().is_empty() {
            log::debug!("Not sending support request with an empty message");
            return false;
        }
        log::info!(
            "Support request from {} <{}>: {}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        );
        *self = Self::default();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Notifications,
    Defaults,
}

impl SettingsSection {
    pub fn saved_message(self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile settings saved successfully!",
            SettingsSection::Notifications => "Notification preferences saved successfully!",
            SettingsSection::Defaults => "Default assessment preferences saved successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportTab {
    #[default]
    Support,
    Settings,
}

#[derive(Debug, Clone, Default)]
pub struct SupportState {
    pub tab: SupportTab,
    pub faq: FaqState,
    pub contact: ContactForm,
    pub profile: Profile,
    pub notifications: Notifications,
    pub defaults: AssessmentDefaults,
    pub status: Option<String>,
}

impl SupportState {
    /// Saving has no durable effect; it only reports success.
    pub fn save(&mut self, section: SettingsSection) {
        match section {
            SettingsSection::Profile => log::info!(
                "Profile: {} <{}> ({})",
                self.profile.name,
                self.profile.email,
                self.profile.role.label()
            ),
            SettingsSection::Notifications => log::info!("Notifications: {:?}", self.notifications),
            SettingsSection::Defaults => log::info!(
                "Defaults: {} / {} / {}",
                self.defaults.difficulty.label(),
                self.defaults.question_count.label(),
                self.defaults.question_type.label()
            ),
        }
        self.status = Some(section.saved_message().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_keeps_at_most_one_open() {
        let mut faq = FaqState::default();
        assert_eq!(faq.expanded(), None);

        faq.toggle(1);
        assert_eq!(faq.expanded(), Some(1));
        faq.toggle(3);
        assert_eq!(faq.expanded(), Some(3));
        assert!(!faq.is_expanded(1));
        faq.toggle(3);
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn test_faq_ignores_out_of_range() {
        let mut faq = FaqState::default();
        faq.toggle(0);
        faq.toggle(FAQ_ITEMS.len());
        assert_eq!(faq.expanded(), Some(0));
    }

    #[test]
    fn test_contact_send_clears_form() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Export fails".to_string(),
        };
        assert!(form.send());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_blank_message_is_kept() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            ..ContactForm::default()
        };
        assert!(!form.send());
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_defaults_and_save_status() {
        let mut state = SupportState::default();
        assert_eq!(state.profile.name, "John Doe");
        assert_eq!(state.defaults.question_count, QuestionCount::Ten);
        assert!(!state.notifications.assessment_reminders);

        state.save(SettingsSection::Notifications);
        assert_eq!(
            state.status.as_deref(),
            Some("Notification preferences saved successfully!")
        );
    }

    #[test]
    fn test_notification_rows_write_through() {
        let mut notifications = Notifications::default();
        for (_, _, flag) in notifications.rows_mut() {
            *flag = false;
        }
        assert!(!notifications.email_notifications);
        assert!(!notifications.system_updates);
    }
}
