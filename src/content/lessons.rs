//! Lesson shelf, grouped by quest group

use super::QuestGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Topic, difficulty and reading time
    pub tags: &'static [&'static str],
    pub document: &'static str,
    pub summary: &'static str,
}

static CHILD_LESSONS: [Lesson; 1] = [Lesson {
    slug: "happy-face-hunt",
    title: "Happy Face Hunt",
    subtitle: "Discovering Emotions Through Play",
    tags: &["Emotions", "Easy", "10 min"],
    document: "pdfs/happy-face-hunt.pdf",
    summary: "A fun lesson to help children recognize and name different emotions.",
}];

static TEEN_LESSONS: [Lesson; 1] = [Lesson {
    slug: "friendship-bridge",
    title: "Friendship Bridge",
    subtitle: "Building Stronger Social Connections",
    tags: &["Social Skills", "Medium", "15 min"],
    document: "pdfs/friendship-bridge.pdf",
    summary: "Learn how to build and maintain healthy friendships.",
}];

static YOUNG_ADULT_LESSONS: [Lesson; 2] = [
    Lesson {
        slug: "navigating-life-transitions",
        title: "Navigating Life Transitions",
        subtitle: "Coping with college, career, and independence challenges",
        tags: &["Life Skills", "Medium", "20 min"],
        document: "pdfs/navigating-life-transitions.pdf",
        summary: "This interactive lesson contains valuable insights and practical exercises designed specifically for Young Adults.",
    },
    Lesson {
        slug: "mental-health-basics",
        title: "Mental Health Basics",
        subtitle: "Understanding mental wellness and when to seek help",
        tags: &["Mental Health", "Medium", "25 min"],
        document: "pdfs/mental-health-basics.pdf",
        summary: "Get to know the basics of mental health and how to get help.",
    },
];

static ADULT_LESSONS: [Lesson; 1] = [Lesson {
    slug: "work-life-balance",
    title: "Work-Life Balance",
    subtitle: "Finding harmony in work and personal life",
    tags: &["Balance", "Advanced", "30 min"],
    document: "pdfs/work-life-balance.pdf",
    summary: "Practical tips for adults to achieve work-life balance.",
}];

/// Lessons available to a quest group. Quiz Cove has none.
pub fn lessons_for(group: QuestGroup) -> &'static [Lesson] {
    match group {
        QuestGroup::EmotionExplorer => &CHILD_LESSONS,
        QuestGroup::MindMaster => &TEEN_LESSONS,
        QuestGroup::TimeTactician => &YOUNG_ADULT_LESSONS,
        QuestGroup::MindfulSage => &ADULT_LESSONS,
        QuestGroup::QuizCove => &[],
    }
}

/// Find a lesson by slug across every group
pub fn find_lesson(slug: &str) -> Option<&'static Lesson> {
    QuestGroup::all()
        .into_iter()
        .flat_map(lessons_for)
        .find(|lesson| lesson.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lessons_per_group() {
        assert_eq!(lessons_for(QuestGroup::EmotionExplorer).len(), 1);
        assert_eq!(lessons_for(QuestGroup::TimeTactician).len(), 2);
        assert!(lessons_for(QuestGroup::QuizCove).is_empty());
    }

    #[test]
    fn test_find_lesson() {
        let lesson = find_lesson("work-life-balance").unwrap();
        assert_eq!(lesson.title, "Work-Life Balance");
        assert!(find_lesson("missing").is_none());
    }
}
