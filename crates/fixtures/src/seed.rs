//! The fixture data set.
//!
//! Built once by [`crate::StaticFixtures::new`]; every collection is read-only
//! afterwards.

use interviewer_core::catalog::{CategoryFacet, ALL_CATEGORY};
use interviewer_core::types::{Date, Difficulty, RecordId};
use interviewer_core::views::View;

use crate::models::content::{
    DashboardCard, DashboardSummary, FeatureCard, Highlight, HomeContent, PreparationContent,
    PreparationPath,
};
use crate::models::discussion::{Author, CommunityStats, DiscussionRecord};
use crate::models::interview::{InterviewRecord, InterviewStatus, QuestionAnalytics};
use crate::models::question::QuestionRecord;
use crate::models::trending::TrendingQuestion;

/// Discussion categories, in sidebar order. Counts are derived from the
/// threads themselves.
pub const DISCUSSION_CATEGORIES: &[&str] =
    &["Technical", "Behavioral", "Career", "Salary", "General"];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}

// ---------------------------------------------------------------------------
// Question bank
// ---------------------------------------------------------------------------

pub fn question_facets() -> Vec<CategoryFacet> {
    vec![
        CategoryFacet::new(ALL_CATEGORY, 1500),
        CategoryFacet::with_subtopics(
            "JavaScript",
            250,
            &["React", "Node.js", "ES6+", "Async/Await"],
        ),
        CategoryFacet::with_subtopics(
            "Python",
            200,
            &["Django", "Flask", "Data Science", "Machine Learning"],
        ),
        CategoryFacet::with_subtopics(
            "System Design",
            150,
            &["Scalability", "Databases", "Microservices", "Caching"],
        ),
        CategoryFacet::with_subtopics(
            "Data Structures",
            180,
            &["Arrays", "Linked Lists", "Trees", "Graphs"],
        ),
        CategoryFacet::with_subtopics(
            "Algorithms",
            160,
            &["Sorting", "Searching", "Dynamic Programming", "Greedy"],
        ),
        CategoryFacet::with_subtopics(
            "Behavioral",
            120,
            &["Leadership", "Teamwork", "Problem Solving", "Communication"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn question(
    id: RecordId,
    title: &str,
    category: &str,
    subtopic: &str,
    difficulty: Difficulty,
    views: u32,
    rating: f32,
    time_to_solve: &str,
    tags: &[&str],
) -> QuestionRecord {
    QuestionRecord {
        id,
        title: title.to_string(),
        category: category.to_string(),
        subtopic: subtopic.to_string(),
        difficulty,
        views,
        rating,
        time_to_solve: time_to_solve.to_string(),
        tags: strings(tags),
    }
}

pub fn questions() -> Vec<QuestionRecord> {
    vec![
        question(
            1,
            "Explain the concept of closures in JavaScript",
            "JavaScript",
            "ES6+",
            Difficulty::Medium,
            1250,
            4.8,
            "15 min",
            &["closures", "scope", "functions"],
        ),
        question(
            2,
            "Design a URL shortening service like bit.ly",
            "System Design",
            "Scalability",
            Difficulty::Hard,
            980,
            4.9,
            "45 min",
            &["system-design", "scalability", "databases"],
        ),
        question(
            3,
            "Implement a binary search algorithm",
            "Algorithms",
            "Searching",
            Difficulty::Easy,
            2100,
            4.6,
            "20 min",
            &["binary-search", "algorithms", "sorting"],
        ),
        question(
            4,
            "Tell me about a time you had to work with a difficult team member",
            "Behavioral",
            "Teamwork",
            Difficulty::Medium,
            850,
            4.7,
            "10 min",
            &["behavioral", "teamwork", "conflict-resolution"],
        ),
        question(
            5,
            "What is React Virtual DOM and how does it work?",
            "JavaScript",
            "React",
            Difficulty::Medium,
            1500,
            4.8,
            "12 min",
            &["react", "virtual-dom", "performance"],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Trending
// ---------------------------------------------------------------------------

pub fn trending_facets() -> Vec<CategoryFacet> {
    vec![
        CategoryFacet::new(ALL_CATEGORY, 150),
        CategoryFacet::new("JavaScript", 35),
        CategoryFacet::new("Python", 28),
        CategoryFacet::new("System Design", 22),
        CategoryFacet::new("React", 18),
        CategoryFacet::new("Algorithms", 25),
        CategoryFacet::new("Behavioral", 15),
    ]
}

struct TrendingSeed {
    title: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    stars: u32,
    views: u32,
    upvotes: u32,
    time_to_solve: &'static str,
    trending_score: u8,
    tags: &'static [&'static str],
    author: &'static str,
    weekly_growth: &'static str,
}

const TRENDING: &[TrendingSeed] = &[
    TrendingSeed {
        title: "How do you handle state management in large React applications?",
        category: "React",
        difficulty: Difficulty::Hard,
        stars: 487,
        views: 12450,
        upvotes: 234,
        time_to_solve: "30 min",
        trending_score: 95,
        tags: &["react", "state-management", "redux", "context"],
        author: "senior_dev_123",
        weekly_growth: "+45%",
    },
    TrendingSeed {
        title: "Design a URL shortening service like bit.ly",
        category: "System Design",
        difficulty: Difficulty::Hard,
        stars: 523,
        views: 18200,
        upvotes: 298,
        time_to_solve: "45 min",
        trending_score: 92,
        tags: &["system-design", "scalability", "microservices"],
        author: "architect_pro",
        weekly_growth: "+38%",
    },
    TrendingSeed {
        title: "Implement a debounce function in JavaScript",
        category: "JavaScript",
        difficulty: Difficulty::Medium,
        stars: 356,
        views: 9800,
        upvotes: 178,
        time_to_solve: "20 min",
        trending_score: 88,
        tags: &["javascript", "closures", "timing", "optimization"],
        author: "js_ninja",
        weekly_growth: "+52%",
    },
    TrendingSeed {
        title: "Tell me about a time when you disagreed with your manager",
        category: "Behavioral",
        difficulty: Difficulty::Medium,
        stars: 289,
        views: 7650,
        upvotes: 145,
        time_to_solve: "10 min",
        trending_score: 85,
        tags: &["behavioral", "conflict-resolution", "communication"],
        author: "hr_expert",
        weekly_growth: "+29%",
    },
    TrendingSeed {
        title: "Find the longest palindromic substring",
        category: "Algorithms",
        difficulty: Difficulty::Medium,
        stars: 412,
        views: 11200,
        upvotes: 189,
        time_to_solve: "25 min",
        trending_score: 83,
        tags: &["algorithms", "strings", "dynamic-programming"],
        author: "algo_master",
        weekly_growth: "+33%",
    },
    TrendingSeed {
        title: "Explain Python's GIL and its impact on multi-threading",
        category: "Python",
        difficulty: Difficulty::Hard,
        stars: 378,
        views: 8900,
        upvotes: 167,
        time_to_solve: "15 min",
        trending_score: 81,
        tags: &["python", "gil", "threading", "performance"],
        author: "python_guru",
        weekly_growth: "+41%",
    },
    TrendingSeed {
        title: "How would you optimize a slow database query?",
        category: "Database",
        difficulty: Difficulty::Hard,
        stars: 334,
        views: 6700,
        upvotes: 134,
        time_to_solve: "20 min",
        trending_score: 78,
        tags: &["database", "optimization", "indexing", "sql"],
        author: "db_specialist",
        weekly_growth: "+26%",
    },
];

pub fn trending() -> Vec<TrendingQuestion> {
    TRENDING
        .iter()
        .zip(1..)
        .map(|(seed, id)| TrendingQuestion {
            id,
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            difficulty: seed.difficulty,
            stars: seed.stars,
            views: seed.views,
            upvotes: seed.upvotes,
            time_to_solve: seed.time_to_solve.to_string(),
            trending_score: seed.trending_score,
            tags: strings(seed.tags),
            author: seed.author.to_string(),
            weekly_growth: seed.weekly_growth.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Discussions
// ---------------------------------------------------------------------------

struct DiscussionSeed {
    title: &'static str,
    author: (&'static str, &'static str, u32),
    content: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    likes: u32,
    replies: u32,
    time_ago: &'static str,
    is_hot: bool,
    last_activity: &'static str,
}

const DISCUSSIONS: &[DiscussionSeed] = &[
    DiscussionSeed {
        title: "How do you negotiate salary as a junior developer?",
        author: ("Alex Chen", "AC", 1250),
        content: "I'm about to graduate and have received my first job offer. The salary seems a bit low compared to market rates. How should I approach salary negotiation as someone with no professional experience?",
        category: "Salary",
        tags: &["negotiation", "junior-dev", "career-advice"],
        likes: 23,
        replies: 8,
        time_ago: "2 hours ago",
        is_hot: true,
        last_activity: "30 min ago",
    },
    DiscussionSeed {
        title: "Best practices for handling errors in React applications?",
        author: ("Sarah Johnson", "SJ", 890),
        content: "I'm working on a React app and struggling with proper error handling. What are the best practices for handling errors both in components and in API calls? Should I use error boundaries everywhere?",
        category: "Technical",
        tags: &["react", "error-handling", "best-practices"],
        likes: 45,
        replies: 15,
        time_ago: "5 hours ago",
        is_hot: true,
        last_activity: "1 hour ago",
    },
    DiscussionSeed {
        title: "How to answer 'Tell me about yourself' effectively?",
        author: ("Mike Rodriguez", "MR", 650),
        content: "I always struggle with this question in interviews. I either ramble too much or keep it too short. What's the ideal structure and length for this answer?",
        category: "Behavioral",
        tags: &["interview-tips", "self-introduction", "behavioral"],
        likes: 31,
        replies: 12,
        time_ago: "1 day ago",
        is_hot: false,
        last_activity: "3 hours ago",
    },
    DiscussionSeed {
        title: "Should I learn TypeScript or focus on JavaScript mastery first?",
        author: ("Emma Wilson", "EW", 420),
        content: "I'm comfortable with JavaScript basics but not an expert yet. Companies are asking for TypeScript experience. Should I learn TS now or become really good at JS first?",
        category: "Career",
        tags: &["typescript", "javascript", "learning-path"],
        likes: 28,
        replies: 20,
        time_ago: "2 days ago",
        is_hot: false,
        last_activity: "5 hours ago",
    },
    DiscussionSeed {
        title: "Red flags to watch out for during the interview process?",
        author: ("David Park", "DP", 1100),
        content: "I've been through several interview processes and noticed some warning signs. What are the red flags candidates should watch for when evaluating companies?",
        category: "General",
        tags: &["red-flags", "company-culture", "interview-process"],
        likes: 67,
        replies: 24,
        time_ago: "3 days ago",
        is_hot: true,
        last_activity: "2 hours ago",
    },
];

pub fn discussions() -> Vec<DiscussionRecord> {
    DISCUSSIONS
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            let (name, initials, reputation) = seed.author;
            DiscussionRecord {
                id,
                title: seed.title.to_string(),
                author: Author {
                    name: name.to_string(),
                    initials: initials.to_string(),
                    reputation,
                },
                content: seed.content.to_string(),
                category: seed.category.to_string(),
                tags: strings(seed.tags),
                likes: seed.likes,
                replies: seed.replies,
                time_ago: seed.time_ago.to_string(),
                is_hot: seed.is_hot,
                last_activity: seed.last_activity.to_string(),
            }
        })
        .collect()
}

/// Facets for the discussion sidebar, counted from `threads`.
pub fn discussion_facets(threads: &[DiscussionRecord]) -> Vec<CategoryFacet> {
    let count = |name: &str| threads.iter().filter(|d| d.category == name).count() as u32;

    std::iter::once(CategoryFacet::new(ALL_CATEGORY, threads.len() as u32))
        .chain(
            DISCUSSION_CATEGORIES
                .iter()
                .map(|name| CategoryFacet::new(name, count(name))),
        )
        .collect()
}

pub fn community_stats() -> CommunityStats {
    CommunityStats {
        active_users: 1247,
        posts_today: 42,
        weekly_growth: "+12%".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Interviews
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn interview(
    id: RecordId,
    title: &str,
    date: Date,
    duration: &str,
    score: u8,
    total_questions: u32,
    correct_answers: u32,
    difficulty: Difficulty,
    category: &str,
) -> InterviewRecord {
    InterviewRecord {
        id,
        title: title.to_string(),
        date,
        duration: duration.to_string(),
        score,
        total_questions,
        correct_answers,
        difficulty,
        category: category.to_string(),
        status: InterviewStatus::Completed,
    }
}

pub fn interviews() -> Vec<InterviewRecord> {
    vec![
        interview(
            1,
            "Frontend Developer Technical Interview",
            date(2024, 1, 15),
            "45 min",
            85,
            15,
            13,
            Difficulty::Medium,
            "Frontend",
        ),
        interview(
            2,
            "React.js Specialist Interview",
            date(2024, 1, 14),
            "60 min",
            92,
            20,
            18,
            Difficulty::Hard,
            "React",
        ),
        interview(
            3,
            "JavaScript Fundamentals Assessment",
            date(2024, 1, 13),
            "30 min",
            78,
            12,
            9,
            Difficulty::Easy,
            "JavaScript",
        ),
        interview(
            4,
            "Full Stack Developer Interview",
            date(2024, 1, 12),
            "90 min",
            88,
            25,
            22,
            Difficulty::Hard,
            "Full Stack",
        ),
        interview(
            5,
            "Node.js Backend Interview",
            date(2024, 1, 11),
            "50 min",
            76,
            18,
            14,
            Difficulty::Medium,
            "Backend",
        ),
    ]
}

pub fn question_analytics() -> Vec<QuestionAnalytics> {
    let row = |id: &str, question: &str, difficulty, score, time: &str| QuestionAnalytics {
        id: id.to_string(),
        question: question.to_string(),
        difficulty,
        score,
        time: time.to_string(),
    };

    vec![
        row("q1", "What is React?", Difficulty::Easy, 90, "2:30"),
        row("q2", "Explain useState hook", Difficulty::Medium, 85, "3:45"),
        row("q3", "What is Virtual DOM?", Difficulty::Easy, 88, "2:15"),
    ]
}

// ---------------------------------------------------------------------------
// Static content
// ---------------------------------------------------------------------------

pub fn dashboard_summary() -> DashboardSummary {
    let card = |title: &str, value: &str, caption: &str| DashboardCard {
        title: title.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
    };

    DashboardSummary {
        cards: vec![
            card("Total Interviews", "24", "+3 from last month"),
            card("Average Score", "85%", "+5% from last month"),
            card("Total Time", "12.5h", "Practice time"),
            card("Improvement", "+12%", "This month"),
        ],
    }
}

pub fn home() -> HomeContent {
    let feature = |title: &str, description: &str, action: &str, target| FeatureCard {
        title: title.to_string(),
        description: description.to_string(),
        action: action.to_string(),
        target,
    };

    HomeContent {
        headline: "Master Your Interview Skills with AI".to_string(),
        tagline: "Prepare for your dream job with our AI-powered interview simulator. Practice, improve, and succeed with personalized feedback.".to_string(),
        stats: vec![
            Highlight::new("50K+", "Practice Sessions"),
            Highlight::new("95%", "Success Rate"),
            Highlight::new("1000+", "Interview Questions"),
        ],
        features: vec![
            feature(
                "User Feedback",
                "Share your experience and help us improve the platform with your valuable feedback.",
                "Share Feedback",
                View::UserFeedback,
            ),
            feature(
                "Suggest Questions",
                "Contribute to our question bank by suggesting new interview questions with proper tags.",
                "Suggest Question",
                View::SuggestQuestions,
            ),
            feature(
                "Trending Questions",
                "Discover the most popular and highly-rated questions from our community.",
                "View Trending",
                View::TrendingQuestions,
            ),
            feature(
                "Discussions",
                "Join the community discussions and get answers to your interview preparation questions.",
                "Join Discussion",
                View::Discussions,
            ),
        ],
    }
}

pub fn preparation() -> PreparationContent {
    PreparationContent {
        paths: vec![
            PreparationPath {
                title: "Practice Based on Skills".to_string(),
                description: "Enhance your technical and soft skills with targeted practice sessions. Choose from programming languages, frameworks, problem-solving, and communication skills.".to_string(),
                features: strings(&["Technical Skills", "Soft Skills", "Problem Solving", "Communication"]),
                action: "Start Skill Practice".to_string(),
            },
            PreparationPath {
                title: "Practice Based on Company".to_string(),
                description: "Prepare for specific companies with curated question sets. Practice with real interview questions from top tech companies and startups.".to_string(),
                features: strings(&["FAANG Companies", "Startups", "Fortune 500", "Industry Specific"]),
                action: "Start Company Practice".to_string(),
            },
        ],
        benefits: vec![
            Highlight::new("AI-Powered", "Smart feedback and personalized recommendations"),
            Highlight::new("Real-time", "Instant analysis and performance tracking"),
            Highlight::new("Adaptive", "Questions that adapt to your skill level"),
        ],
    }
}
