//! Canned wellness-companion conversation options

/// Opening message shown when a conversation starts or is reset
pub const CHAT_GREETING: &str =
    "Hi there! 👋 I'm your wellness companion. Choose how you're feeling today:";

/// A feeling the user can pick, with the replies the companion may give
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOption {
    pub label: &'static str,
    pub responses: &'static [&'static str],
}

pub static CHAT_OPTIONS: [ChatOption; 18] = [
    ChatOption {
        label: "I'm feeling anxious",
        responses: &[
            "It's okay to feel anxious sometimes. Try to focus on your breath and remember that these feelings will pass. 🌸",
            "Remember, anxiety is just a feeling—it can’t hurt you. You are safe right now.",
            "You are not alone in feeling anxious. Reach out if you need someone to talk to. 🤝",
        ],
    },
    ChatOption {
        label: "I'm struggling today",
        responses: &[
            "Even on tough days, you are still you—and that's enough. Take things one step at a time. 💫",
            "Struggling doesn't mean you're failing—it means you're trying, and that's brave.",
            "You have overcome hard days before. This one will pass too. 🌈",
        ],
    },
    ChatOption {
        label: "I need some motivation",
        responses: &[
            "You've overcome challenges before, and you can do it again. Believe in yourself, you're stronger than you think! 💎",
            "Every small step forward is progress. Keep going, you're doing great! 🚀",
            "Your efforts matter, even if progress feels slow. Trust your journey.",
        ],
    },
    ChatOption {
        label: "I want to rest",
        responses: &[
            "It's okay to rest. Resting is part of healing too. Give yourself permission to recharge. 🌙",
            "Rest is productive. Taking care of yourself helps you move forward.",
            "You deserve to rest. Listen to your body and mind—they know what you need.",
        ],
    },
    ChatOption {
        label: "I'm proud of myself",
        responses: &[
            "You have every reason to be proud! Celebrate your progress and how far you've come. 🎉",
            "Your achievements—big and small—are worth celebrating.",
            "Being proud of yourself is a beautiful thing. Keep shining! 🌟",
        ],
    },
    ChatOption {
        label: "I feel alone",
        responses: &[
            "You're not alone in this—support is around you, and your feelings matter. 🤝",
            "It’s normal to feel alone sometimes, but remember, people care about you.",
            "Reach out to someone you trust. You're worthy of connection.",
        ],
    },
    ChatOption {
        label: "I'm grateful today",
        responses: &[
            "Gratitude is powerful! Recognizing what you're thankful for brings light to your journey. 🌅",
            "What you appreciate, appreciates. Keep noticing the good around you.",
            "Gratitude helps heal. Thank you for sharing your positive energy!",
        ],
    },
    ChatOption {
        label: "I want to start over",
        responses: &[
            "You're allowed to start over whenever you need to. Every sunrise brings new beginnings. 🌅",
            "Starting over isn't failing—it's choosing yourself and your growth.",
            "A fresh start means you’re brave enough to keep moving forward.",
        ],
    },
    ChatOption {
        label: "I'm overwhelmed",
        responses: &[
            "When life feels overwhelming, remember to pause and take a deep breath. You are handling more than you realize, and it's okay to ask for support. 🌊",
            "Break big tasks into small steps—one at a time is enough.",
            "Your feelings are valid. Take things slow and be gentle with yourself.",
        ],
    },
    ChatOption {
        label: "I'm feeling hopeful",
        responses: &[
            "Hope is a powerful force! Keep nurturing it, and let it guide you towards brighter days ahead. ✨",
            "Hold on to hope—it can light up even the darkest times.",
            "Your hope inspires others. Thank you for sharing it.",
        ],
    },
    ChatOption {
        label: "I need encouragement",
        responses: &[
            "You are capable of amazing things. Every step you take matters, and you have what it takes to keep moving forward. 🚀",
            "Remember, progress is progress, no matter how small.",
            "Your strength and courage are showing, even if you can't see it yet.",
        ],
    },
    ChatOption {
        label: "I want to set boundaries",
        responses: &[
            "Setting boundaries is an act of self-care. You deserve respect and space—it's okay to say no. 🛑",
            "Healthy boundaries protect your peace. Be proud of yourself for setting them.",
            "Your needs matter. Setting boundaries lets others know how to support you.",
        ],
    },
    ChatOption {
        label: "I'm healing from a loss",
        responses: &[
            "Healing from loss takes time. Be gentle with yourself and allow yourself to grieve. You're not alone in this. 🕊️",
            "Your feelings are valid. Honor them and give yourself space to heal.",
            "It's okay to ask for help while healing. Others want to support you.",
        ],
    },
    ChatOption {
        label: "I want to celebrate small wins",
        responses: &[
            "Small wins are worth celebrating! Every achievement, no matter the size, is a sign of progress. 🎈",
            "Every step forward is a reason for joy. Celebrate your journey.",
            "Your small wins add up to big changes. Keep going!",
        ],
    },
    ChatOption {
        label: "I'm tired of struggling",
        responses: &[
            "It's okay to feel tired. Remember, your resilience has brought you this far—rest, and know that you are stronger than you think. 🌻",
            "Struggle is part of growth. Rest and recharge as you need.",
            "You've gotten through difficult times before—you will again.",
        ],
    },
    ChatOption {
        label: "I feel misunderstood",
        responses: &[
            "Your feelings are valid, even if others don't understand them. You deserve to be heard and respected for who you are. 💙",
            "You matter, and your story matters. Keep expressing yourself.",
            "Being misunderstood is hard, but your truth is important.",
        ],
    },
    ChatOption {
        label: "I want to forgive myself",
        responses: &[
            "Forgiving yourself is a brave and healing act. You are not your mistakes—embrace growth and kindness. 🍃",
            "You deserve compassion, especially from yourself.",
            "Let go of guilt. You're learning and growing every day.",
        ],
    },
    ChatOption {
        label: "I'm learning and growing",
        responses: &[
            "Every day brings new opportunities for learning and growth. Be proud of your journey and the person you're becoming. 🌱",
            "Growth is not always linear—keep moving forward.",
            "Learning is a sign of strength. Keep going!",
        ],
    },
];
