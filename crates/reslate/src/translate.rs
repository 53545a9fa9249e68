//! The translation capability.
//!
//! A [`Translate`] implementation is the pluggable step every resolved
//! string is routed through. From the lookup layer's point of view it is a
//! total function over text: it always answers, and what it answers with
//! (a machine translation, a dictionary hit, the input unchanged) is its
//! own business. Services are injected where a wrapper is constructed and
//! shared as `Arc<dyn Translate>`; nothing in this crate reaches for a
//! process-wide instance.

use std::sync::Arc;

/// A text transformation applied to resolved strings.
///
/// Implementations must be safe to share across threads; one service
/// instance typically backs every wrapper in the process. A service that
/// cannot translate a given input should return its best effort (commonly
/// the input itself) rather than signal failure: resolution errors belong
/// to the provider, not to this seam.
pub trait Translate: Send + Sync {
    /// Translate one resolved string.
    fn translate(&self, text: &str) -> String;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Translate + ?Sized> Translate for Box<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Translate + ?Sized> Translate for Arc<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

/// The identity service: every string comes back unchanged.
///
/// Useful as the service for tests and for deployments where translation
/// is switched off but the wrapped provider should stay in place.
///
/// ```
/// use reslate::{Translate, Verbatim};
///
/// assert_eq!(Verbatim.translate("Save file"), "Save file");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl Translate for Verbatim {
    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }
}
