//! Fixed analytics datasets and the report filter form.

use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScore {
    pub name: &'static str,
    pub score: f32,
    pub participants: u32,
    pub improvement: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSlice {
    pub name: &'static str,
    pub percent: f32,
    pub color: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub assessments: u32,
    pub completion_rate: f32,
    pub avg_score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPerformance {
    pub difficulty: &'static str,
    pub avg_score: f32,
    pub pass_rate: f32,
    pub participants: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartmentPerformance {
    pub department: &'static str,
    pub avg_score: f32,
    pub completion_rate: f32,
    pub assessments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGap {
    pub skill: &'static str,
    pub current: f32,
    pub target: f32,
}

impl SkillGap {
    pub fn gap(&self) -> f32 {
        (self.target - self.current).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopPerformer {
    pub name: &'static str,
    pub department: &'static str,
    pub avg_score: f32,
    pub assessments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const AVG_SCORES: [CategoryScore; 6] = [
    CategoryScore { name: "Cybersecurity", score: 78.0, participants: 145, improvement: 5.2 },
    CategoryScore { name: "Programming", score: 85.0, participants: 203, improvement: 3.1 },
    CategoryScore { name: "Project Mgmt", score: 72.0, participants: 98, improvement: -1.2 },
    CategoryScore { name: "Data Science", score: 80.0, participants: 167, improvement: 7.8 },
    CategoryScore { name: "Marketing", score: 76.0, participants: 89, improvement: 2.4 },
    CategoryScore { name: "Design", score: 82.0, participants: 76, improvement: 4.1 },
];

pub const COMPLETION_STATUS: [CompletionSlice; 3] = [
    CompletionSlice { name: "Completed", percent: 65.0, color: "#10B981", count: 1853 },
    CompletionSlice { name: "In Progress", percent: 25.0, color: "#F59E0B", count: 712 },
    CompletionSlice { name: "Not Started", percent: 10.0, color: "#EF4444", count: 285 },
];

pub const MONTHLY_TRENDS: [MonthlyTrend; 6] = [
    MonthlyTrend { month: "Jan", assessments: 120, completion_rate: 68.0, avg_score: 74.0 },
    MonthlyTrend { month: "Feb", assessments: 132, completion_rate: 72.0, avg_score: 76.0 },
    MonthlyTrend { month: "Mar", assessments: 141, completion_rate: 69.0, avg_score: 78.0 },
    MonthlyTrend { month: "Apr", assessments: 138, completion_rate: 75.0, avg_score: 77.0 },
    MonthlyTrend { month: "May", assessments: 156, completion_rate: 78.0, avg_score: 79.0 },
    MonthlyTrend { month: "Jun", assessments: 142, completion_rate: 71.0, avg_score: 80.0 },
];

pub const BY_DIFFICULTY: [DifficultyPerformance; 3] = [
    DifficultyPerformance { difficulty: "Easy", avg_score: 87.0, pass_rate: 92.0, participants: 324 },
    DifficultyPerformance { difficulty: "Medium", avg_score: 75.0, pass_rate: 78.0, participants: 567 },
    DifficultyPerformance { difficulty: "Hard", avg_score: 62.0, pass_rate: 54.0, participants: 189 },
];

pub const DEPARTMENTS: [DepartmentPerformance; 5] = [
    DepartmentPerformance { department: "Engineering", avg_score: 82.0, completion_rate: 78.0, assessments: 45 },
    DepartmentPerformance { department: "Marketing", avg_score: 76.0, completion_rate: 85.0, assessments: 32 },
    DepartmentPerformance { department: "Sales", avg_score: 71.0, completion_rate: 72.0, assessments: 28 },
    DepartmentPerformance { department: "HR", avg_score: 79.0, completion_rate: 91.0, assessments: 19 },
    DepartmentPerformance { department: "Finance", avg_score: 77.0, completion_rate: 68.0, assessments: 23 },
];

pub const SKILL_GAPS: [SkillGap; 5] = [
    SkillGap { skill: "Technical Skills", current: 65.0, target: 85.0 },
    SkillGap { skill: "Communication", current: 78.0, target: 90.0 },
    SkillGap { skill: "Leadership", current: 62.0, target: 80.0 },
    SkillGap { skill: "Problem Solving", current: 71.0, target: 85.0 },
    SkillGap { skill: "Teamwork", current: 82.0, target: 90.0 },
];

pub const TOP_PERFORMERS: [TopPerformer; 5] = [
    TopPerformer { name: "Alice Johnson", department: "Engineering", avg_score: 94.0, assessments: 8 },
    TopPerformer { name: "Bob Smith", department: "Marketing", avg_score: 91.0, assessments: 6 },
    TopPerformer { name: "Carol Davis", department: "Finance", avg_score: 89.0, assessments: 7 },
    TopPerformer { name: "David Wilson", department: "HR", avg_score: 88.0, assessments: 5 },
    TopPerformer { name: "Eva Brown", department: "Sales", avg_score: 87.0, assessments: 9 },
];

pub const HEADLINE_METRICS: [Metric; 4] = [
    Metric { label: "Total Participants", value: "2,850", note: "+12% this month" },
    Metric { label: "Average Score", value: "78.5%", note: "+2.1% improvement" },
    Metric { label: "Completion Rate", value: "75.2%", note: "+5.8% this month" },
    Metric { label: "Trending Up", value: "6", note: "categories improved" },
];

pub const ASSESSMENT_FILTERS: [(&str, &str); 4] = [
    ("all", "All Assessments"),
    ("cybersecurity", "Cybersecurity Fundamentals"),
    ("react", "React Development Quiz"),
    ("pm", "Project Management"),
];

pub const CATEGORY_FILTERS: [(&str, &str); 4] = [
    ("all", "All Categories"),
    ("technical", "Technical"),
    ("soft-skills", "Soft Skills"),
    ("leadership", "Leadership"),
];

pub fn filter_label<'a>(options: &[(&'a str, &'a str)], value: &str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("'{0}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("start date {from} is after end date {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilters {
    pub assessment: String,
    pub category: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilters {
    pub assessment: String,
    pub category: String,
    pub from: String,
    pub to: String,
}

impl Default for ReportFilters {
    fn default() -> Self {
        Self {
            assessment: "all".to_string(),
            category: "all".to_string(),
            from: "2024-01-01".to_string(),
            to: "2024-12-31".to_string(),
        }
    }
}

impl ReportFilters {
    /// Validates the form. The datasets are fixed, so applying only logs.
    pub fn apply(&self) -> Result<AppliedFilters, FilterError> {
        let from = parse_date(&self.from)?;
        let to = parse_date(&self.to)?;
        if from > to {
            return Err(FilterError::InvertedRange { from, to });
        }
        log::info!(
            "Applying report filters: assessment={} category={} range={}..={}",
            self.assessment,
            self.category,
            from,
            to
        );
        Ok(AppliedFilters {
            assessment: self.assessment.clone(),
            category: self.category.clone(),
            from,
            to,
        })
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| FilterError::InvalidDate(text.to_string()))
}

pub fn export_report(filters: &ReportFilters) {
    log::info!(
        "Exporting report (assessment={}, category={})",
        filters.assessment,
        filters.category
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_apply() {
        let applied = ReportFilters::default().apply().unwrap();
        assert_eq!(applied.from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(applied.to, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(applied.assessment, "all");
    }

    #[test]
    fn test_invalid_date_rejected() {
        let filters = ReportFilters {
            from: "2024-13-01".to_string(),
            ..ReportFilters::default()
        };
        assert_eq!(
            filters.apply(),
            Err(FilterError::InvalidDate("2024-13-01".to_string()))
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        let filters = ReportFilters {
            from: "2024-06-01".to_string(),
            to: "2024-05-31".to_string(),
            ..ReportFilters::default()
        };
        assert!(matches!(filters.apply(), Err(FilterError::InvertedRange { .. })));
    }

    #[test]
    fn test_same_day_range_is_fine() {
        let filters = ReportFilters {
            from: "2024-06-01".to_string(),
            to: " 2024-06-01 ".to_string(),
            ..ReportFilters::default()
        };
        assert!(filters.apply().is_ok());
    }

    #[test]
    fn test_dataset_shapes() {
        let total: f32 = COMPLETION_STATUS.iter().map(|s| s.percent).sum();
        assert_eq!(total, 100.0);
        assert_eq!(SKILL_GAPS[0].gap(), 20.0);
        assert_eq!(SKILL_GAPS[4].gap(), 8.0);
        assert_eq!(filter_label(&CATEGORY_FILTERS, "soft-skills"), "Soft Skills");
        assert_eq!(filter_label(&ASSESSMENT_FILTERS, "nope"), "");
    }
}
