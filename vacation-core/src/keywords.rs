use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// Words understood as dates in user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Today,
    Yesterday,
    Tomorrow,
    #[strum(serialize = "this week")]
    ThisWeek,
    #[strum(serialize = "next week")]
    NextWeek,
    #[strum(serialize = "this month")]
    ThisMonth,
    #[strum(serialize = "next month")]
    NextMonth,
}

pub struct Keywords;

impl Keywords {
    /// Global registry of lowercased input → keyword, seeded with every canonical word.
    ///
    /// Initialized on first access and guarded by a [`RwLock`] so synonyms from the
    /// configuration can be added at start-up.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m = Keyword::iter()
                .map(|keyword| (keyword.as_ref().to_string(), keyword))
                .collect();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Adds `(alias, target)` synonyms. The target must already be known (a canonical
    /// word or an earlier synonym); unknown targets and aliases that would shadow a
    /// canonical word are skipped.
    ///
    /// ```toml
    /// [synonyms]
    /// heute = "today"
    /// morgen = "tomorrow"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = match Self::registry().write() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (alias, target) in synonyms {
            if Self::is_canonical(alias) {
                warn!("synonym '{alias}' collides with a built-in keyword, ignored");
                continue;
            }
            match reg.get(&target.to_lowercase()) {
                Some(&canonical) => {
                    reg.insert(alias.to_lowercase(), canonical);
                }
                None => warn!("synonym '{alias}' points to unknown keyword '{target}', ignored"),
            }
        }
    }

    /// Returns `true` if `word` is a built-in keyword (eg "today"), case-insensitively.
    pub fn is_canonical(word: &str) -> bool {
        let lower = word.to_lowercase();
        Keyword::iter().any(|key| key.as_ref() == lower)
    }

    /// Resolves `input` (case-insensitive, surrounding whitespace ignored) to a keyword.
    pub fn lookup(input: &str) -> Option<Keyword> {
        let reg = match Self::registry().read() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        reg.get(&input.trim().to_lowercase()).copied()
    }

    /// Returns `true` if `input` is the given keyword or one of its synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::lookup(input) == Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords() {
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert!(Keywords::matches(Keyword::Today, "  TODAY "));
        assert!(Keywords::matches(Keyword::NextWeek, "next week"));
        assert!(Keywords::matches(Keyword::Friday, "Friday"));
    }

    #[test]
    fn synonyms_extend() {
        Keywords::extend(&[
            ("heute".into(), "today".into()),
            ("Morgen".into(), "tomorrow".into()),
            ("nächste woche".into(), "next week".into()),
        ]);
        assert!(Keywords::matches(Keyword::Today, "heute"));
        assert!(Keywords::matches(Keyword::Tomorrow, "morgen"));
        assert!(Keywords::matches(Keyword::NextWeek, "Nächste Woche"));
    }

    #[test]
    fn synonyms_cannot_shadow_keywords_or_point_nowhere() {
        Keywords::extend(&[
            ("today".into(), "yesterday".into()),
            ("someday".into(), "never".into()),
        ]);
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert_eq!(Keywords::lookup("someday"), None);
    }

    #[test]
    fn canonical_words() {
        assert!(Keywords::is_canonical("this month"));
        assert!(Keywords::is_canonical("Sunday"));
        assert!(!Keywords::is_canonical("heute"));
    }

    #[test]
    fn unknown_word_is_not_a_keyword() {
        assert_eq!(Keywords::lookup("not in registry"), None);
        assert!(!Keywords::matches(Keyword::Tomorrow, "2024-12-01"));
    }
}
