//! Exam schedule backing the Exam Tracker page.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExamStatus {
    Scheduled,
    InProgress { completed: u32, remaining: u32 },
    Completed { avg_score: f32, pass_rate: f32 },
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Scheduled => "Scheduled",
            ExamStatus::InProgress { .. } => "In Progress",
            ExamStatus::Completed { .. } => "Completed",
        }
    }

    pub fn tab(&self) -> ExamTab {
        match self {
            ExamStatus::Scheduled => ExamTab::Upcoming,
            ExamStatus::InProgress { .. } => ExamTab::Ongoing,
            ExamStatus::Completed { .. } => ExamTab::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExamTab {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl ExamTab {
    pub const ALL: [ExamTab; 3] = [ExamTab::Upcoming, ExamTab::Ongoing, ExamTab::Completed];

    pub fn label(self) -> &'static str {
        match self {
            ExamTab::Upcoming => "Upcoming",
            ExamTab::Ongoing => "Ongoing",
            ExamTab::Completed => "Completed",
        }
    }

    /// The button each row on this tab offers next to its badge.
    pub fn action_label(self) -> &'static str {
        match self {
            ExamTab::Upcoming => "Reschedule",
            ExamTab::Ongoing => "Monitor",
            ExamTab::Completed => "View Results",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub time: String,
    pub participants: u32,
    pub status: ExamStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamError {
    #[error("no exam with id {0}")]
    UnknownExam(u32),
    #[error("only completed exams can be deleted")]
    NotCompleted,
}

#[derive(Debug, Clone, Default)]
pub struct ExamBoard {
    exams: Vec<Exam>,
    tab: ExamTab,
}

impl ExamBoard {
    pub fn sample() -> Self {
        use ExamStatus::*;
        let rows = [
            (1, "Cybersecurity Final Assessment", "2024-02-15", "14:00", 45, Scheduled),
            (2, "React Development Quiz", "2024-02-18", "10:30", 32, Scheduled),
            (3, "Project Management Midterm", "2024-02-20", "09:00", 28, Scheduled),
            (4, "Database Design Assessment", "2024-02-12", "11:00", 38, InProgress { completed: 23, remaining: 15 }),
            (5, "Digital Marketing Quiz", "2024-02-12", "13:30", 19, InProgress { completed: 12, remaining: 7 }),
            (6, "Python Programming Test", "2024-02-10", "15:00", 41, Completed { avg_score: 82.5, pass_rate: 95.0 }),
            (7, "Data Analysis Quiz", "2024-02-08", "10:00", 29, Completed { avg_score: 78.2, pass_rate: 89.0 }),
            (8, "Web Development Assessment", "2024-02-05", "14:30", 35, Completed { avg_score: 85.1, pass_rate: 97.0 }),
        ];
        let exams = rows
            .into_iter()
            .map(|(id, name, date, time, participants, status)| Exam {
                id,
                name: name.to_string(),
                date: date.to_string(),
                time: time.to_string(),
                participants,
                status,
            })
            .collect();
        Self {
            exams,
            tab: ExamTab::default(),
        }
    }

    pub fn all(&self) -> &[Exam] {
        &self.exams
    }

    pub fn tab(&self) -> ExamTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ExamTab) {
        self.tab = tab;
    }

    pub fn in_tab(&self, tab: ExamTab) -> impl Iterator<Item = &Exam> {
        self.exams.iter().filter(move |e| e.status.tab() == tab)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Exam> {
        self.in_tab(self.tab)
    }

    pub fn count(&self, tab: ExamTab) -> usize {
        self.in_tab(tab).count()
    }

    /// Row action (Reschedule, Monitor, View Results). Nothing changes.
    pub fn action(&self, id: u32) -> Result<&'static str, ExamError> {
        let exam = self
            .exams
            .iter()
            .find(|e| e.id == id)
            .ok_or(ExamError::UnknownExam(id))?;
        let action = exam.status.tab().action_label();
        log::info!("{action} requested for exam {} '{}'", exam.id, exam.name);
        Ok(action)
    }

    pub fn delete(&mut self, id: u32) -> Result<Exam, ExamError> {
        let index = self
            .exams
            .iter()
            .position(|e| e.id == id)
            .ok_or(ExamError::UnknownExam(id))?;
        if !matches!(self.exams[index].status, ExamStatus::Completed { .. }) {
            return Err(ExamError::NotCompleted);
        }
        let removed = self.exams.remove(index);
        log::info!("Deleted exam {} '{}'", removed.id, removed.name);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_partition_samples() {
        let board = ExamBoard::sample();
        assert_eq!(board.count(ExamTab::Upcoming), 3);
        assert_eq!(board.count(ExamTab::Ongoing), 2);
        assert_eq!(board.count(ExamTab::Completed), 3);
        assert_eq!(board.all().len(), 8);
    }

    #[test]
    fn test_visible_follows_tab() {
        let mut board = ExamBoard::sample();
        assert_eq!(board.tab(), ExamTab::Upcoming);
        board.set_tab(ExamTab::Ongoing);
        let names: Vec<&str> = board.visible().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Database Design Assessment", "Digital Marketing Quiz"]);
    }

    #[test]
    fn test_delete_only_completed() {
        let mut board = ExamBoard::sample();
        assert_eq!(board.delete(1), Err(ExamError::NotCompleted));
        assert_eq!(board.delete(42), Err(ExamError::UnknownExam(42)));

        let removed = board.delete(7).unwrap();
        assert_eq!(removed.name, "Data Analysis Quiz");
        assert_eq!(board.count(ExamTab::Completed), 2);
        assert_eq!(board.all().len(), 7);
    }

    #[test]
    fn test_actions_by_status() {
        let board = ExamBoard::sample();
        assert_eq!(board.action(2), Ok("Reschedule"));
        assert_eq!(board.action(4), Ok("Monitor"));
        assert_eq!(board.action(8), Ok("View Results"));
        assert_eq!(ExamStatus::Scheduled.label(), "Scheduled");
    }
}
