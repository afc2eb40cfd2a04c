use std::time::{Duration, Instant};

pub const STAGE_INTERVAL: Duration = Duration::from_secs(2);
pub const COMPLETION_DELAY: Duration = Duration::from_secs(1);
pub const SUCCESS_MESSAGE: &str = "Assessment generated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STAGES: [StageInfo; 4] = [
    StageInfo {
        id: "analyzing",
        label: "Analyzing requirements",
        icon: "🔍",
    },
    StageInfo {
        id: "generating",
        label: "Generating questions",
        icon: "🧠",
    },
    StageInfo {
        id: "formatting",
        label: "Formatting assessment",
        icon: "📄",
    },
    StageInfo {
        id: "finalizing",
        label: "Finalizing content",
        icon: "✅",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Loading,
    Complete,
}

/// Fake generation progress. All timing derives from `started`, so dropping
/// the value is the only cancellation there is.
#[derive(Debug, Clone)]
pub struct LoadingStage {
    started: Instant,
    completed: bool,
}

impl LoadingStage {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            completed: false,
        }
    }

    pub fn current_index(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let slots = (elapsed.as_millis() / STAGE_INTERVAL.as_millis()) as usize;
        slots.min(STAGES.len() - 1)
    }

    /// Percentage in `25.0..=100.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        (self.current_index(now) + 1) as f32 / STAGES.len() as f32 * 100.0
    }

    pub fn status(&self, index: usize, now: Instant) -> StageStatus {
        let current = self.current_index(now);
        if index < current {
            StageStatus::Complete
        } else if index == current {
            StageStatus::Loading
        } else {
            StageStatus::Pending
        }
    }

    pub fn is_generated(&self, now: Instant) -> bool {
        self.current_index(now) == STAGES.len() - 1
    }

    pub fn completion_at(&self) -> Instant {
        self.started + STAGE_INTERVAL * STAGES.len() as u32 + COMPLETION_DELAY
    }

    /// Returns true exactly once, on the first poll at or after completion.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.completed || now < self.completion_at() {
            return false;
        }
        self.completed = true;
        true
    }

    /// Next instant the display changes: the next stage boundary, or
    /// completion once the last stage is showing.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        if self.completed {
            return None;
        }
        let current = self.current_index(now);
        if current + 1 < STAGES.len() {
            Some(self.started + STAGE_INTERVAL * (current as u32 + 1))
        } else {
            Some(self.completion_at())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_advances_every_interval() {
        let start = Instant::now();
        let stage = LoadingStage::new(start);
        assert_eq!(stage.current_index(start), 0);
        assert_eq!(stage.current_index(start + Duration::from_millis(1999)), 0);
        assert_eq!(stage.current_index(start + STAGE_INTERVAL), 1);
        assert_eq!(stage.current_index(start + STAGE_INTERVAL * 2), 2);
        assert_eq!(stage.current_index(start + STAGE_INTERVAL * 3), 3);
        assert_eq!(stage.current_index(start + Duration::from_secs(60)), 3);
    }

    #[test]
    fn test_progress_and_status() {
        let start = Instant::now();
        let stage = LoadingStage::new(start);
        assert_eq!(stage.progress(start), 25.0);
        assert_eq!(stage.progress(start + STAGE_INTERVAL * 3), 100.0);

        let now = start + STAGE_INTERVAL * 2;
        assert_eq!(stage.status(0, now), StageStatus::Complete);
        assert_eq!(stage.status(1, now), StageStatus::Complete);
        assert_eq!(stage.status(2, now), StageStatus::Loading);
        assert_eq!(stage.status(3, now), StageStatus::Pending);
        assert!(!stage.is_generated(now));
        assert!(stage.is_generated(start + STAGE_INTERVAL * 3));
    }

    #[test]
    fn test_completion_fires_once_at_nine_seconds() {
        let start = Instant::now();
        let mut stage = LoadingStage::new(start);
        assert_eq!(stage.completion_at(), start + Duration::from_secs(9));

        assert!(!stage.poll(start + Duration::from_millis(8999)));
        assert!(stage.poll(start + Duration::from_secs(9)));
        assert!(!stage.poll(start + Duration::from_secs(10)));
        assert_eq!(stage.next_deadline(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_next_deadline_walks_boundaries() {
        let start = Instant::now();
        let stage = LoadingStage::new(start);
        assert_eq!(stage.next_deadline(start), Some(start + STAGE_INTERVAL));
        assert_eq!(
            stage.next_deadline(start + Duration::from_millis(4500)),
            Some(start + STAGE_INTERVAL * 3)
        );
        assert_eq!(
            stage.next_deadline(start + Duration::from_secs(7)),
            Some(start + Duration::from_secs(9))
        );
    }
}
