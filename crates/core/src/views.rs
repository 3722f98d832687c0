//! Navigable view identifiers.
//!
//! A hosting shell maps a path to one of these and mounts that page's data.
//! Paths carry no parameters; anything unrecognised resolves to
//! [`View::NotFound`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Dashboard,
    PastInterviews,
    InterviewPreparation,
    QuestionBank,
    UserFeedback,
    SuggestQuestions,
    TrendingQuestions,
    Discussions,
    NotFound,
}

impl View {
    /// Every routable view, in navigation order. Excludes the fallback.
    pub const ROUTABLE: [View; 9] = [
        View::Home,
        View::Dashboard,
        View::PastInterviews,
        View::InterviewPreparation,
        View::QuestionBank,
        View::UserFeedback,
        View::SuggestQuestions,
        View::TrendingQuestions,
        View::Discussions,
    ];

    /// The route path, or `None` for the fallback view.
    pub fn path(self) -> Option<&'static str> {
        match self {
            View::Home => Some("/"),
            View::Dashboard => Some("/dashboard"),
            View::PastInterviews => Some("/past-interviews"),
            View::InterviewPreparation => Some("/interview-preparation"),
            View::QuestionBank => Some("/question-bank"),
            View::UserFeedback => Some("/user-feedback"),
            View::SuggestQuestions => Some("/suggest-questions"),
            View::TrendingQuestions => Some("/trending-questions"),
            View::Discussions => Some("/discussions"),
            View::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "AI Interviewer",
            View::Dashboard => "Dashboard",
            View::PastInterviews => "Past Interviews",
            View::InterviewPreparation => "Interview Preparation",
            View::QuestionBank => "Question Bank",
            View::UserFeedback => "User Feedback",
            View::SuggestQuestions => "Suggest Questions",
            View::TrendingQuestions => "Trending Questions",
            View::Discussions => "Community Discussions",
            View::NotFound => "Page Not Found",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            View::Home => "Practice interviews, track progress, and learn from the community.",
            View::Dashboard => "Track your interview performance and analytics",
            View::PastInterviews => "Review your interview history and performance",
            View::InterviewPreparation => {
                "Choose your preparation path and start mastering interview skills."
            }
            View::QuestionBank => {
                "Explore our comprehensive collection of interview questions across different technologies and skills."
            }
            View::UserFeedback => {
                "Share your thoughts, report bugs, or suggest new ideas."
            }
            View::SuggestQuestions => {
                "Help grow our question bank by contributing high-quality interview questions with proper tags and explanations."
            }
            View::TrendingQuestions => {
                "Discover the most popular and highly-rated questions from our community."
            }
            View::Discussions => {
                "Join the conversation, ask questions, and share your experiences."
            }
            View::NotFound => "The page you are looking for does not exist.",
        }
    }

    /// Resolve a path to its view. A single trailing slash is ignored and
    /// query strings or fragments are not expected.
    pub fn resolve(path: &str) -> View {
        let path = path.trim();
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        Self::ROUTABLE
            .into_iter()
            .find(|v| v.path() == Some(normalized))
            .unwrap_or(View::NotFound)
    }
}

/// Serializable description of a view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewInfo {
    pub id: View,
    pub path: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<View> for ViewInfo {
    fn from(view: View) -> Self {
        Self {
            id: view,
            path: view.path(),
            title: view.title(),
            description: view.description(),
        }
    }
}
