//! Property-based invariant tests for plural selection, interpolation,
//! and the translating wrapper:
//!
//! 1.  Every built-in plural rule always returns a valid PluralCategory
//! 2.  Plural rules are deterministic: same count → same category
//! 3.  CJK always returns Other for any count
//! 4.  English: One for ±1, Other otherwise
//! 5.  French: One for |n| <= 1, Other otherwise
//! 6.  Negative counts use absolute value for built-in rules
//! 7.  Interpolation with no tokens is identity
//! 8.  Interpolation is single-pass (no recursive substitution)
//! 9.  Non-positional tokens survive formatting untouched
//! 10. PluralForms::select always returns a non-empty form for One/Other
//! 11. Missing ids fail every fallible lookup and fall back on text_or
//! 12. Quantity lookups inject the count value
//! 13. for_locale never panics on arbitrary strings
//! 14. Wrapped lookup equals translate(direct lookup)
//! 15. Failed lookups never reach the translation service

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use reslate::{LookupError, ResourceId, RichText, TextProvider, Translate, Translated};
use reslate_catalog::{Catalog, PluralCategory, PluralForms, PluralRule};

// ── Helpers ──────────────────────────────────────────────────────────

fn all_built_in_rules() -> Vec<PluralRule> {
    vec![
        PluralRule::English,
        PluralRule::French,
        PluralRule::Russian,
        PluralRule::Polish,
        PluralRule::Arabic,
        PluralRule::CJK,
    ]
}

fn is_valid_category(cat: PluralCategory) -> bool {
    matches!(
        cat,
        PluralCategory::Zero
            | PluralCategory::One
            | PluralCategory::Two
            | PluralCategory::Few
            | PluralCategory::Many
            | PluralCategory::Other
    )
}

struct Upper;

impl Translate for Upper {
    fn translate(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

#[derive(Default)]
struct Counting(AtomicUsize);

impl Counting {
    fn calls(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Translate for Counting {
    fn translate(&self, text: &str) -> String {
        self.0.fetch_add(1, Ordering::SeqCst);
        text.to_owned()
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Every built-in rule returns a valid category
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn all_rules_return_valid_category(count in any::<i64>()) {
        for rule in all_built_in_rules() {
            let cat = rule.categorize(count);
            prop_assert!(
                is_valid_category(cat),
                "rule {:?} returned invalid category {:?} for count {}",
                rule, cat, count
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Plural rules are deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plural_rules_deterministic(count in any::<i64>()) {
        for rule in all_built_in_rules() {
            let a = rule.categorize(count);
            let b = rule.categorize(count);
            prop_assert_eq!(a, b, "rule {:?} non-deterministic for count {}", rule, count);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. CJK always returns Other
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cjk_always_other(count in any::<i64>()) {
        let cat = PluralRule::CJK.categorize(count);
        prop_assert_eq!(cat, PluralCategory::Other, "CJK should always return Other");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. English: One for ±1, Other for everything else
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn english_one_or_other(count in any::<i64>()) {
        let cat = PluralRule::English.categorize(count);
        if count == 1 || count == -1 {
            prop_assert_eq!(cat, PluralCategory::One);
        } else {
            prop_assert_eq!(cat, PluralCategory::Other);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. French: One for |n| <= 1
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn french_zero_and_one_are_singular(count in any::<i64>()) {
        let cat = PluralRule::French.categorize(count);
        if count.unsigned_abs() <= 1 {
            prop_assert_eq!(cat, PluralCategory::One, "French: |{}| <= 1 should be One", count);
        } else {
            prop_assert_eq!(cat, PluralCategory::Other, "French: |{}| > 1 should be Other", count);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Negative counts use absolute value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn negative_matches_positive(count in 0i64..=100_000) {
        for rule in all_built_in_rules() {
            let pos = rule.categorize(count);
            let neg = rule.categorize(-count);
            prop_assert_eq!(
                pos, neg,
                "rule {:?}: categorize({}) != categorize({})",
                rule, count, -count
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Interpolation with no tokens is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn formatting_without_tokens_is_identity(text in "[a-zA-Z0-9 .,!?]*") {
        let mut catalog = Catalog::new();
        catalog.insert_string(ResourceId(1), text.as_str());
        let result = catalog.format(ResourceId(1), &[]).unwrap();
        prop_assert_eq!(result, text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Interpolation is single-pass (no recursive substitution)
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn interpolation_not_recursive() {
    let mut catalog = Catalog::new();
    catalog.insert_string(ResourceId(1), "Hello {0}!");

    // A substituted value that itself looks like a token must not be
    // re-expanded (or rejected) on a second pass.
    let result = catalog.format(ResourceId(1), &["{0}"]).unwrap();
    assert_eq!(result, "Hello {0}!");

    let result2 = catalog.format(ResourceId(1), &["{9}"]).unwrap();
    assert_eq!(result2, "Hello {9}!");
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Non-positional tokens survive formatting untouched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn named_tokens_are_preserved(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{name}}}");
        let mut catalog = Catalog::new();
        catalog.insert_string(ResourceId(1), template.as_str());
        let result = catalog.format(ResourceId(1), &["spare"]).unwrap();
        prop_assert_eq!(result, template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. PluralForms::select always returns a form for One/Other
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plural_forms_select_never_empty(
        one in "[a-z]{1,20}",
        other in "[a-z]{1,20}",
    ) {
        let forms = PluralForms {
            one: one.clone(),
            other: other.clone(),
            ..Default::default()
        };
        let categories = [
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ];
        for cat in categories {
            let selected = forms.select(cat);
            prop_assert!(!selected.is_empty(), "select({:?}) returned empty", cat);
            match cat {
                PluralCategory::One => prop_assert_eq!(selected, one.as_str()),
                PluralCategory::Other => prop_assert_eq!(selected, other.as_str()),
                _ => prop_assert_eq!(selected, other.as_str(), "missing form should fall back to other"),
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Missing ids fail every fallible lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_id_fails_everywhere(raw in any::<u32>()) {
        let catalog = Catalog::new();
        let id = ResourceId(raw);
        let expected = Err(LookupError::not_found(id));

        prop_assert_eq!(catalog.string(id), expected.clone());
        prop_assert_eq!(catalog.format(id, &["x"]), expected.clone());
        prop_assert_eq!(catalog.text(id), Err(LookupError::not_found(id)));
        prop_assert_eq!(catalog.plural(id, 1), expected.clone());
        prop_assert_eq!(catalog.string_array(id), Err(LookupError::not_found(id)));
        prop_assert_eq!(
            catalog.text_or(id, RichText::plain("fallback")),
            RichText::plain("fallback")
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 12. Quantity lookups inject the count value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plural_injects_count(count in -1000i64..=1000) {
        let mut catalog = Catalog::new();
        catalog.insert_plural(
            ResourceId(1),
            PluralForms::simple("{count} item", "{count} items"),
        );

        let text = catalog.plural(ResourceId(1), count).unwrap();
        prop_assert!(
            text.contains(&count.to_string()),
            "plural result '{}' should contain count '{}'",
            text, count
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 13. for_locale never panics on arbitrary strings
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn for_locale_never_panics(locale in ".*") {
        let _rule = PluralRule::for_locale(&locale);
        // Just verify no panic
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 14. Wrapped lookup equals translate(direct lookup)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wrapper_commutes_with_direct_lookup(value in "[a-zA-Z0-9 .,!?]*") {
        let mut catalog = Catalog::new();
        catalog.insert_string(ResourceId(1), value.as_str());

        let direct = catalog.string(ResourceId(1)).unwrap();
        let wrapper = Translated::new(catalog, Upper);

        prop_assert_eq!(
            wrapper.string(ResourceId(1)).unwrap(),
            Upper.translate(&direct)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 15. Failed lookups never reach the translation service
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn failures_bypass_the_service(raw in any::<u32>()) {
        let service = Arc::new(Counting::default());
        let wrapper = Translated::with_service(
            Catalog::new(),
            service.clone() as Arc<dyn Translate>,
        );
        let id = ResourceId(raw);

        prop_assert!(wrapper.string(id).is_err());
        prop_assert!(wrapper.format(id, &[]).is_err());
        prop_assert!(wrapper.text(id).is_err());
        prop_assert!(wrapper.plural(id, 2).is_err());
        prop_assert!(wrapper.string_array(id).is_err());
        prop_assert_eq!(service.calls(), 0);
    }
}
