//! Path table for the sidebar pages.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Categories,
    Reports,
    ExamTracker,
    AiAssistant,
    SupportSettings,
    NotFound(String),
}

impl Route {
    /// The six navigable pages, in sidebar order.
    pub fn navigation() -> [Route; 6] {
        [
            Route::Dashboard,
            Route::Categories,
            Route::Reports,
            Route::ExamTracker,
            Route::AiAssistant,
            Route::SupportSettings,
        ]
    }

    /// Resolves a path; anything outside the table falls through to `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" => Route::Dashboard,
            "/categories" => Route::Categories,
            "/reports" => Route::Reports,
            "/exam-tracker" => Route::ExamTracker,
            "/ai-assistant" => Route::AiAssistant,
            "/support-settings" => Route::SupportSettings,
            "" => Route::NotFound(trimmed.to_string()),
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Categories => "/categories",
            Route::Reports => "/reports",
            Route::ExamTracker => "/exam-tracker",
            Route::AiAssistant => "/ai-assistant",
            Route::SupportSettings => "/support-settings",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Categories => "Categories",
            Route::Reports => "Reports",
            Route::ExamTracker => "Exam Tracker",
            Route::AiAssistant => "AI Assistant",
            Route::SupportSettings => "Support & Settings",
            Route::NotFound(_) => "Not Found",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::Categories => "📁",
            Route::Reports => "📊",
            Route::ExamTracker => "📋",
            Route::AiAssistant => "🤖",
            Route::SupportSettings => "❓",
            Route::NotFound(_) => "⚠",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        for route in Route::navigation() {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Route::resolve("/reports/"), Route::Reports);
        assert_eq!(Route::resolve("/"), Route::Dashboard);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            Route::resolve("/grades"),
            Route::NotFound("/grades".to_string())
        );
        assert_eq!(Route::resolve(""), Route::NotFound(String::new()));
        assert_eq!(Route::resolve("/grades").path(), "/grades");
        assert_eq!(Route::resolve("//"), Route::NotFound("//".to_string()));
        assert_eq!(Route::resolve(" /// ").path(), "///");
    }

    #[test]
    fn test_navigation_order() {
        let titles: Vec<&str> = Route::navigation().iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            [
                "Dashboard",
                "Categories",
                "Reports",
                "Exam Tracker",
                "AI Assistant",
                "Support & Settings"
            ]
        );
    }
}
