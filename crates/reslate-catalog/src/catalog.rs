//! In-memory resource catalog keyed by numeric id.
//!
//! # Invariants
//!
//! 1. **Single-pass interpolation**: `{token}` substitution walks the
//!    template once; substituted values are never re-expanded.
//!
//! 2. **Strict positional arguments**: a digits-only token (`{0}`, `{1}`)
//!    with no matching argument fails the lookup with `Format`. Anything
//!    else between braces is left in place.
//!
//! 3. **Kind mismatches resolve as not-found**: asking for a string array
//!    at an id that stores plain text (or vice versa) reports `NotFound`,
//!    the same as an absent id.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing id | Never inserted | `NotFound` |
//! | Kind mismatch | e.g. `string_array` on a text entry | `NotFound` |
//! | Out-of-range `{n}` | Fewer arguments than the template uses | `Format` |
//! | Named token | `{name}` in a positional template | Left as-is |
//! | Unclosed brace | `{0` at end of template | Emitted as-is |

use reslate::{LookupError, ResourceId, Result, RichText, TextProvider};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::plural::{PluralForms, PluralRule};

/// One stored resource value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry {
    /// A string, possibly carrying styling spans.
    Text(RichText),
    /// Quantity templates selected by plural category.
    Plural(PluralForms),
    /// An ordered list of strings.
    Array(Vec<String>),
}

/// Id-keyed, single-locale resource store.
///
/// Implements the full [`TextProvider`] contract, which makes it both a
/// usable standalone provider and the natural inner layer for
/// [`Translated`](reslate::Translated).
///
/// ```
/// use reslate::{ResourceId, TextProvider};
/// use reslate_catalog::{Catalog, PluralForms};
///
/// let mut catalog = Catalog::for_locale("en");
/// catalog.insert_string(ResourceId(1), "Save file");
/// catalog.insert_plural(
///     ResourceId(2),
///     PluralForms::simple("{count} item", "{count} items"),
/// );
///
/// assert_eq!(catalog.string(ResourceId(1)).unwrap(), "Save file");
/// assert_eq!(catalog.plural(ResourceId(2), 5).unwrap(), "5 items");
/// assert_eq!(catalog.plural(ResourceId(2), 1).unwrap(), "1 item");
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    entries: FxHashMap<ResourceId, Entry>,
    rule: PluralRule,
}

impl Catalog {
    /// Empty catalog with the English plural rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty catalog with the plural rule for `tag` pre-selected.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        Self {
            entries: FxHashMap::default(),
            rule: PluralRule::for_locale(tag),
        }
    }

    /// Override the plural rule.
    pub fn set_plural_rule(&mut self, rule: PluralRule) {
        self.rule = rule;
    }

    /// The rule quantity lookups select with.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Store a plain string at `id`.
    pub fn insert_string(&mut self, id: ResourceId, value: impl Into<String>) {
        self.entries.insert(id, Entry::Text(RichText::plain(value)));
    }

    /// Store rich text at `id`.
    pub fn insert_rich(&mut self, id: ResourceId, value: RichText) {
        self.entries.insert(id, Entry::Text(value));
    }

    /// Store quantity templates at `id`.
    pub fn insert_plural(&mut self, id: ResourceId, forms: PluralForms) {
        self.entries.insert(id, Entry::Plural(forms));
    }

    /// Store a string array at `id`.
    pub fn insert_array<I, S>(&mut self, id: ResourceId, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.insert(id, Entry::Array(values));
    }

    /// The entry stored at `id`, whatever its kind.
    #[must_use]
    pub fn entry(&self, id: ResourceId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored ids, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.entries.keys().copied()
    }

    fn lookup(&self, id: ResourceId) -> Result<&Entry> {
        self.entries.get(&id).ok_or_else(|| {
            debug!(id = %id, "no entry for resource");
            LookupError::NotFound { id }
        })
    }
}

impl TextProvider for Catalog {
    fn string(&self, id: ResourceId) -> Result<String> {
        match self.lookup(id)? {
            Entry::Text(text) => Ok(text.plain_text().to_owned()),
            Entry::Plural(forms) => Ok(forms.other.clone()),
            Entry::Array(_) => {
                debug!(id = %id, "entry holds an array, plain lookup fails");
                Err(LookupError::NotFound { id })
            }
        }
    }

    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String> {
        let template = self.string(id)?;
        interpolate_positional(id, &template, args)
    }

    fn text(&self, id: ResourceId) -> Result<RichText> {
        match self.lookup(id)? {
            Entry::Text(text) => Ok(text.clone()),
            Entry::Plural(forms) => Ok(RichText::plain(forms.other.clone())),
            Entry::Array(_) => {
                debug!(id = %id, "entry holds an array, rich lookup fails");
                Err(LookupError::NotFound { id })
            }
        }
    }

    fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
        self.text(id).unwrap_or(default)
    }

    fn plural(&self, id: ResourceId, count: i64) -> Result<String> {
        let template = match self.lookup(id)? {
            Entry::Plural(forms) => forms.select(self.rule.categorize(count)),
            // A plain entry answers for every quantity.
            Entry::Text(text) => text.plain_text(),
            Entry::Array(_) => {
                debug!(id = %id, "entry holds an array, quantity lookup fails");
                return Err(LookupError::NotFound { id });
            }
        };
        Ok(interpolate_named(template, &[("count", &count.to_string())]))
    }

    fn string_array(&self, id: ResourceId) -> Result<Vec<String>> {
        match self.lookup(id)? {
            Entry::Array(values) => Ok(values.clone()),
            _ => {
                debug!(id = %id, "entry does not hold an array");
                Err(LookupError::NotFound { id })
            }
        }
    }
}

/// Replace digits-only `{n}` tokens with the n-th argument.
///
/// Single pass. Tokens that are not pure decimal digits are left in place;
/// a digits-only token with no matching argument fails with
/// [`LookupError::Format`]. Extra arguments are ignored.
fn interpolate_positional(id: ResourceId, template: &str, args: &[&str]) -> Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut found_close = false;
        for c in chars.by_ref() {
            if c == '}' {
                found_close = true;
                break;
            }
            token.push(c);
        }

        if !found_close {
            // Unclosed brace: emit as-is
            result.push('{');
            result.push_str(&token);
            continue;
        }

        let positional = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
        if positional {
            let value = token
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index).copied());
            match value {
                Some(v) => result.push_str(v),
                None => {
                    return Err(LookupError::format(
                        id,
                        format!("no argument for token {{{token}}} ({} supplied)", args.len()),
                    ));
                }
            }
        } else {
            // Not positional: leave the token as-is
            result.push('{');
            result.push_str(&token);
            result.push('}');
        }
    }

    Ok(result)
}

/// Replace `{name}` tokens from a name/value list.
///
/// Single pass; tokens without a matching name are left as-is.
fn interpolate_named(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut found_close = false;
        for c in chars.by_ref() {
            if c == '}' {
                found_close = true;
                break;
            }
            token.push(c);
        }

        if !found_close {
            result.push('{');
            result.push_str(&token);
            continue;
        }

        if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
            result.push_str(value);
        } else {
            result.push('{');
            result.push_str(&token);
            result.push('}');
        }
    }

    result
}
