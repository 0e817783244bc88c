//! Emoji pool for the memory sequence game

use super::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryEmoji {
    pub glyph: &'static str,
    pub name: &'static str,
}

impl ContentItem for MemoryEmoji {
    fn label(&self) -> &str {
        self.glyph
    }
}

pub static MEMORY_EMOJIS: [MemoryEmoji; 8] = [
    MemoryEmoji { glyph: "😄", name: "Grin" },
    MemoryEmoji { glyph: "😌", name: "Calm" },
    MemoryEmoji { glyph: "🌈", name: "Rainbow" },
    MemoryEmoji { glyph: "🦋", name: "Butterfly" },
    MemoryEmoji { glyph: "🍀", name: "Clover" },
    MemoryEmoji { glyph: "🍉", name: "Melon" },
    MemoryEmoji { glyph: "🌟", name: "Star" },
    MemoryEmoji { glyph: "🎈", name: "Balloon" },
];
