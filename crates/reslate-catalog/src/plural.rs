//! CLDR-style plural selection.
//!
//! Quantity entries store one template per plural category. A locale's
//! [`PluralRule`] maps a count to a [`PluralCategory`], and
//! [`PluralForms::select`] picks the template for it. The rules cover the
//! integer behavior of the major rule families; fractional quantities are
//! not a resource-lookup concern.

/// CLDR plural category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PluralCategory {
    /// Explicit zero form (Arabic).
    Zero,
    /// Singular.
    One,
    /// Dual (Arabic).
    Two,
    /// Paucal (Slavic 2..4, Arabic 3..10).
    Few,
    /// Large or irregular quantities.
    Many,
    /// The default form every language has.
    Other,
}

/// Templates keyed by plural category.
///
/// `one` and `other` carry the two forms every entry needs; the remaining
/// categories are optional and fall back to `other` when missing or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PluralForms {
    /// Explicit zero form.
    pub zero: Option<String>,
    /// Singular form.
    pub one: String,
    /// Dual form.
    pub two: Option<String>,
    /// Paucal form.
    pub few: Option<String>,
    /// Many form.
    pub many: Option<String>,
    /// Default form.
    pub other: String,
}

impl PluralForms {
    /// Shorthand for languages that only distinguish singular and plural.
    #[must_use]
    pub fn simple(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
            ..Self::default()
        }
    }

    /// The template for `category`, falling back to `other` when the
    /// category has no non-empty form.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        let form = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => Some(self.one.as_str()),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => None,
        };
        match form {
            Some(s) if !s.is_empty() => s,
            _ => &self.other,
        }
    }
}

/// Integer plural rule families.
///
/// ```
/// use reslate_catalog::{PluralCategory, PluralRule};
///
/// assert_eq!(PluralRule::Russian.categorize(3), PluralCategory::Few);
/// assert_eq!(PluralRule::for_locale("ru-RU").categorize(11), PluralCategory::Many);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PluralRule {
    /// `One` for |n| == 1 (English, German, Dutch, Italian, ...).
    #[default]
    English,
    /// `One` for |n| <= 1 (French and relatives).
    French,
    /// `One`/`Few`/`Many` by final digits (Russian, Ukrainian, Serbian, ...).
    Russian,
    /// Like Russian, except only exactly 1 is `One` (Polish).
    Polish,
    /// The full six-category scheme (Arabic).
    Arabic,
    /// No plural distinction (Japanese, Chinese, Korean, Thai, ...).
    CJK,
}

impl PluralRule {
    /// The rule for a locale tag.
    ///
    /// Accepts BCP 47-ish tags; only the primary language subtag matters.
    /// Unknown languages map to `English`, so this never fails.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let lowered = tag.to_lowercase();
        let language = lowered.split(['-', '_']).next().unwrap_or_default();
        match language {
            "fr" | "hy" | "ff" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" => Self::CJK,
            _ => Self::English,
        }
    }

    /// Map `count` to its plural category.
    ///
    /// Negative counts categorize like their absolute value.
    #[must_use]
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                let m10 = n % 10;
                let m100 = n % 100;
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                let m10 = n % 10;
                let m100 = n % 100;
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => {
                let m100 = n % 100;
                if n == 0 {
                    PluralCategory::Zero
                } else if n == 1 {
                    PluralCategory::One
                } else if n == 2 {
                    PluralCategory::Two
                } else if (3..=10).contains(&m100) {
                    PluralCategory::Few
                } else if (11..=99).contains(&m100) {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            Self::CJK => PluralCategory::Other,
        }
    }
}
