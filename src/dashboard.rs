//! Dashboard summary data.

use crate::assessment::manual::SavedAssessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const STATS: [StatCard; 4] = [
    StatCard { title: "Total Assessments", value: "142", icon: "📄" },
    StatCard { title: "Total Users", value: "1,284", icon: "👥" },
    StatCard { title: "Assessments Taken", value: "3,567", icon: "📈" },
    StatCard { title: "Average Score", value: "78.5%", icon: "🏆" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAssessment {
    pub name: String,
    pub category: String,
    pub created: String,
    pub questions: usize,
}

/// Which creator the "New Assessment" dialog opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMode {
    Manual,
    Ai,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    recent: Vec<RecentAssessment>,
}

impl Default for Dashboard {
    fn default() -> Self {
        let recent = [
            ("Cybersecurity Fundamentals", "Security", "2 hours ago", 25),
            ("React Development Quiz", "Programming", "1 day ago", 15),
            ("Project Management Basics", "Management", "3 days ago", 30),
            ("Database Design", "Programming", "1 week ago", 20),
        ]
        .into_iter()
        .map(|(name, category, created, questions)| RecentAssessment {
            name: name.to_string(),
            category: category.to_string(),
            created: created.to_string(),
            questions,
        })
        .collect();
        Self { recent }
    }
}

impl Dashboard {
    pub fn recent(&self) -> &[RecentAssessment] {
        &self.recent
    }

    /// Puts a freshly saved manual assessment at the top of the list.
    pub fn record_saved(&mut self, saved: &SavedAssessment) {
        self.recent.insert(
            0,
            RecentAssessment {
                name: saved.title.clone(),
                category: if saved.category.is_empty() {
                    "Uncategorized".to_string()
                } else {
                    saved.category.clone()
                },
                created: "just now".to_string(),
                questions: saved.questions,
            },
        );
    }

    pub fn view(&self, index: usize) -> Option<&RecentAssessment> {
        let item = self.recent.get(index)?;
        log::info!("Viewing assessment '{}'", item.name);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dashboard() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.recent().len(), 4);
        assert_eq!(STATS[3].value, "78.5%");
        assert!(dashboard.view(9).is_none());
    }

    #[test]
    fn test_saved_assessment_goes_first() {
        let mut dashboard = Dashboard::default();
        dashboard.record_saved(&SavedAssessment {
            title: "Networking 101".to_string(),
            category: String::new(),
            questions: 3,
            total_points: 6,
        });
        let first = &dashboard.recent()[0];
        assert_eq!(first.name, "Networking 101");
        assert_eq!(first.category, "Uncategorized");
        assert_eq!(first.created, "just now");
        assert_eq!(dashboard.recent().len(), 5);
    }
}
