//! The phrase table: every user-facing string of the shell in both locales.
//!
//! Keys are the canonical English phrases. The table is build-time data; the
//! runtime never edits it. Authoring gaps (empty strings, duplicate keys) are
//! reported by [`crate::i18n::TranslationValidator`], not at lookup time.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One phrase rendered in each supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Stable lookup handle used across the codebase
    pub key: &'static str,

    /// English rendering
    pub en: &'static str,

    /// Amharic rendering
    pub am: &'static str,
}

impl Translation {
    /// The stored string for a locale, returned as-is even when empty.
    pub fn get(&self, language: Language) -> &'static str {
        if language == Language::AMHARIC {
            self.am
        } else {
            self.en
        }
    }
}

/// Indexed view over a slice of [`Translation`] entries.
#[derive(Debug)]
pub struct TranslationTable {
    entries: &'static [Translation],
    index: HashMap<&'static str, usize>,
}

static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Build an index over `entries`. With duplicate keys the first entry
    /// wins.
    pub fn new(entries: &'static [Translation]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.key).or_insert(position);
        }
        Self { entries, index }
    }

    /// The shell's built-in table.
    pub fn builtin() -> &'static TranslationTable {
        BUILTIN.get_or_init(|| TranslationTable::new(TRANSLATIONS))
    }

    pub fn lookup(&self, key: &str) -> Option<&'static Translation> {
        let entries = self.entries;
        self.index.get(key).map(|&position| &entries[position])
    }

    pub fn entries(&self) -> &'static [Translation] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

macro_rules! phrase {
    ($en:literal, $am:literal) => {
        Translation {
            key: $en,
            en: $en,
            am: $am,
        }
    };
}

/// Built-in phrases.
pub const TRANSLATIONS: &[Translation] = &[
    // ==================== Shell Chrome ====================
    phrase!("Admin Panel", "የአስተዳዳሪ ፓነል"),
    phrase!("Student Portal", "የተማሪ ፖርታል"),
    phrase!("Main navigation", "ዋና ማውጫ"),
    phrase!("Search...", "ፈልግ..."),
    phrase!("Notifications", "ማሳወቂያዎች"),
    phrase!("Collapse sidebar", "የጎን አሞሌን ሰብስብ"),
    phrase!("Expand sidebar", "የጎን አሞሌን ዘርጋ"),
    phrase!("Open menu", "ምናሌ ክፈት"),
    phrase!("Close menu", "ምናሌ ዝጋ"),
    phrase!("Close", "ዝጋ"),
    phrase!("More", "ተጨማሪ"),
    phrase!("Logout", "ውጣ"),
    phrase!("Language", "ቋንቋ"),
    phrase!("Welcome back", "እንኳን ደህና መጡ"),
    phrase!("Learning Assistant", "የትምህርት ረዳት"),
    phrase!("Ask the assistant", "ረዳቱን ይጠይቁ"),
    // ==================== Admin Navigation ====================
    phrase!("Dashboard", "ዳሽቦርድ"),
    phrase!("Programs", "ፕሮግራሞች"),
    phrase!("Courses", "ኮርሶች"),
    phrase!("Students", "ተማሪዎች"),
    phrase!("Instructors", "አስተማሪዎች"),
    phrase!("Enrollments", "ምዝገባዎች"),
    phrase!("Payments", "ክፍያዎች"),
    phrase!("Reports", "ሪፖርቶች"),
    phrase!("Analytics", "ትንታኔ"),
    phrase!("Certificates", "የምስክር ወረቀቶች"),
    phrase!("Settings", "ቅንብሮች"),
    // ==================== Student Navigation ====================
    phrase!("My Programs", "የእኔ ፕሮግራሞች"),
    phrase!("My Courses", "የእኔ ኮርሶች"),
    phrase!("Assignments", "የቤት ስራዎች"),
    phrase!("Grades", "ውጤቶች"),
    phrase!("Calendar", "የቀን መቁጠሪያ"),
    phrase!("Messages", "መልዕክቶች"),
    phrase!("Profile", "መገለጫ"),
];
