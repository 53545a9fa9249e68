//! Translating wrapper over any text provider.
//!
//! # Invariants
//!
//! 1. **One translation per translating lookup**: every value returned from
//!    `string`, `format`, `text`, or `text_or` has passed through the
//!    service exactly once.
//!
//! 2. **Substitution before translation**: `format` hands the service the
//!    fully substituted string, never the raw template.
//!
//! 3. **Failures bypass the service**: a lookup that fails propagates the
//!    provider's error unchanged; the service is not consulted.
//!
//! 4. **Stateless**: the wrapper holds no cache and no session state, so
//!    identical lookups repeat the full delegate-then-translate round trip.
//!
//! 5. **Pass-through operations stay untouched**: `plural` and
//!    `string_array` delegate verbatim with zero service calls.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `NotFound` | Inner provider has no entry | Propagated unchanged |
//! | `Format` | Inner provider substitution failed | Propagated unchanged |
//! | Service panic | Translation implementation bug | Unwinds to the caller |

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::provider::{ResourceId, Result, TextProvider};
use crate::text::RichText;
use crate::translate::Translate;

/// A provider that translates everything the inner provider resolves.
///
/// `Translated` implements [`TextProvider`] by delegating each lookup to
/// the wrapped provider and routing the resolved value through the
/// injected [`Translate`] service. Because the wrapper satisfies the same
/// contract it consumes, it drops into any code that already takes a
/// provider, and wrappers nest.
///
/// Two behaviors are deliberate and worth knowing about:
///
/// - **Rich text is narrowed.** [`text`](TextProvider::text) and
///   [`text_or`](TextProvider::text_or) flatten the resolved value to
///   plain text before translating, so styling spans do not survive a
///   translated lookup.
/// - **Defaults are translated too.** On the with-default path the service
///   sees whatever is being returned, including the caller's own fallback
///   value.
///
/// ```
/// use reslate::{LookupError, ResourceId, RichText, TextProvider, Translated};
/// # struct Greetings;
/// # impl TextProvider for Greetings {
/// #     fn string(&self, id: ResourceId) -> reslate::Result<String> {
/// #         match id.0 {
/// #             1 => Ok("Hello".to_owned()),
/// #             _ => Err(LookupError::not_found(id)),
/// #         }
/// #     }
/// #     fn format(&self, id: ResourceId, args: &[&str]) -> reslate::Result<String> {
/// #         Ok(format!("{} {}", self.string(id)?, args.join(" ")))
/// #     }
/// #     fn text(&self, id: ResourceId) -> reslate::Result<RichText> {
/// #         self.string(id).map(RichText::plain)
/// #     }
/// #     fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
/// #         self.text(id).unwrap_or(default)
/// #     }
/// #     fn plural(&self, id: ResourceId, _count: i64) -> reslate::Result<String> {
/// #         self.string(id)
/// #     }
/// #     fn string_array(&self, id: ResourceId) -> reslate::Result<Vec<String>> {
/// #         Err(LookupError::not_found(id))
/// #     }
/// # }
/// struct French;
///
/// impl reslate::Translate for French {
///     fn translate(&self, text: &str) -> String {
///         match text {
///             "Hello" => "Bonjour".to_owned(),
///             other => other.to_owned(),
///         }
///     }
/// }
///
/// let resources = Translated::new(Greetings, French);
/// assert_eq!(resources.string(ResourceId(1)).unwrap(), "Bonjour");
///
/// // Failed lookups pass through; the service never sees them.
/// assert_eq!(
///     resources.string(ResourceId(9)),
///     Err(LookupError::not_found(ResourceId(9)))
/// );
/// ```
pub struct Translated<P> {
    inner: P,
    service: Arc<dyn Translate>,
}

impl<P> Translated<P> {
    /// Wrap `inner`, routing resolved text through `service`.
    pub fn new(inner: P, service: impl Translate + 'static) -> Self {
        Self {
            inner,
            service: Arc::new(service),
        }
    }

    /// Wrap `inner` with an already shared service handle.
    ///
    /// Use this when several wrappers should observe the same service
    /// instance (the usual deployment: one service, many providers).
    pub fn with_service(inner: P, service: Arc<dyn Translate>) -> Self {
        Self { inner, service }
    }

    /// The wrapped provider.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap, discarding the service handle.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }

    /// The shared translation service handle.
    #[must_use]
    pub fn service(&self) -> &Arc<dyn Translate> {
        &self.service
    }
}

impl<P: Clone> Clone for Translated<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            service: Arc::clone(&self.service),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Translated<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translated")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P: TextProvider> TextProvider for Translated<P> {
    fn string(&self, id: ResourceId) -> Result<String> {
        let resolved = self.inner.string(id)?;
        trace!(id = %id, "translating resolved string");
        Ok(self.service.translate(&resolved))
    }

    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String> {
        // The provider substitutes first; the service sees the finished
        // sentence, never the template.
        let substituted = self.inner.format(id, args)?;
        trace!(id = %id, arg_count = args.len(), "translating formatted string");
        Ok(self.service.translate(&substituted))
    }

    /// Spans do not survive this path: the resolved value is flattened to
    /// plain text, translated, and returned span-less.
    fn text(&self, id: ResourceId) -> Result<RichText> {
        let resolved = self.inner.text(id)?;
        trace!(id = %id, span_count = resolved.spans().len(), "translating rich text");
        Ok(RichText::plain(self.service.translate(resolved.plain_text())))
    }

    /// Whatever comes back from the inner provider is translated, the
    /// caller's `default` included.
    fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
        let resolved = self.inner.text_or(id, default);
        trace!(id = %id, "translating rich text (with default)");
        RichText::plain(self.service.translate(resolved.plain_text()))
    }

    fn plural(&self, id: ResourceId, count: i64) -> Result<String> {
        self.inner.plural(id, count)
    }

    fn string_array(&self, id: ResourceId) -> Result<Vec<String>> {
        self.inner.string_array(id)
    }
}
