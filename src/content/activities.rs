//! Activities for the wellness day planner

use serde::{Deserialize, Serialize};

use super::ContentItem;

/// How strongly an activity supports a healthy day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Points awarded for scheduling an activity of this priority
    pub fn points(&self) -> u32 {
        match self {
            Self::High => 30,
            Self::Medium => 20,
            Self::Low => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    PhysicalWellness,
    Mindfulness,
    SocialConnection,
    Relaxation,
    Nutrition,
    SelfCare,
    Rest,
    Reflection,
    Laughter,
}

impl ActivityCategory {
    pub fn all() -> [Self; 9] {
        [
            Self::PhysicalWellness,
            Self::Mindfulness,
            Self::SocialConnection,
            Self::Relaxation,
            Self::Nutrition,
            Self::SelfCare,
            Self::Rest,
            Self::Reflection,
            Self::Laughter,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PhysicalWellness => "Physical Wellness",
            Self::Mindfulness => "Mindfulness",
            Self::SocialConnection => "Social Connection",
            Self::Relaxation => "Relaxation",
            Self::Nutrition => "Nutrition",
            Self::SelfCare => "Self-Care",
            Self::Rest => "Rest",
            Self::Reflection => "Reflection",
            Self::Laughter => "Laughter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub name: &'static str,
    pub minutes: u32,
    pub category: ActivityCategory,
    pub priority: Priority,
    pub benefit: &'static str,
}

impl ContentItem for Activity {
    fn label(&self) -> &str {
        self.name
    }

    fn weight(&self) -> u32 {
        self.priority.points()
    }
}

pub static ACTIVITIES: [Activity; 10] = [
    Activity {
        name: "Morning Stretch",
        minutes: 20,
        category: ActivityCategory::PhysicalWellness,
        priority: Priority::High,
        benefit: "Regular movement can reduce anxiety and boost mood.",
    },
    Activity {
        name: "Mindful Breathing",
        minutes: 10,
        category: ActivityCategory::Mindfulness,
        priority: Priority::High,
        benefit: "Mindfulness helps you manage stress and stay grounded.",
    },
    Activity {
        name: "Talk to a Friend",
        minutes: 25,
        category: ActivityCategory::SocialConnection,
        priority: Priority::Medium,
        benefit: "Connecting with others supports emotional wellbeing.",
    },
    Activity {
        name: "Read a Book",
        minutes: 30,
        category: ActivityCategory::Relaxation,
        priority: Priority::Medium,
        benefit: "Reading can help you relax and escape negative thoughts.",
    },
    Activity {
        name: "Healthy Lunch",
        minutes: 40,
        category: ActivityCategory::Nutrition,
        priority: Priority::High,
        benefit: "Eating nutritious meals can improve energy and focus.",
    },
    Activity {
        name: "Nature Walk",
        minutes: 30,
        category: ActivityCategory::SelfCare,
        priority: Priority::High,
        benefit: "Spending time outdoors reduces stress and improves mood.",
    },
    Activity {
        name: "Short Nap",
        minutes: 15,
        category: ActivityCategory::Rest,
        priority: Priority::Low,
        benefit: "Rest helps your brain recharge and recover from stress.",
    },
    Activity {
        name: "Journaling",
        minutes: 20,
        category: ActivityCategory::Reflection,
        priority: Priority::Medium,
        benefit: "Writing about your feelings can provide clarity and relief.",
    },
    Activity {
        name: "Watch a Comedy",
        minutes: 30,
        category: ActivityCategory::Laughter,
        priority: Priority::Low,
        benefit: "Laughter releases endorphins and lowers stress levels.",
    },
    Activity {
        name: "Gratitude Practice",
        minutes: 10,
        category: ActivityCategory::Mindfulness,
        priority: Priority::Medium,
        benefit: "Gratitude boosts positivity and lowers depressive symptoms.",
    },
];
