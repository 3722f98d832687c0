//! Derived, read-only views over a [`FixtureSource`](crate::FixtureSource).
//!
//! Each repository is a unit struct with associated functions taking the
//! source explicitly. Nothing here mutates a fixture.

pub mod discussion_repo;
pub mod interview_repo;
pub mod question_repo;
pub mod trending_repo;

pub use discussion_repo::DiscussionRepo;
pub use interview_repo::InterviewRepo;
pub use question_repo::QuestionRepo;
pub use trending_repo::TrendingRepo;
