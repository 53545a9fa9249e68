#![forbid(unsafe_code)]

//! Transparent translation for string resource lookups.
//!
//! `reslate` wraps a source of resolved text strings so that everything it
//! hands out has passed through a translation service first. Callers keep
//! the lookup contract they already use; the wrapper delegates each call to
//! the inner provider, routes the resolved value through the service, and
//! returns the result.
//!
//! # Role in reslate
//! This crate is the contract layer. It defines what a text provider is
//! ([`TextProvider`]), what a translation service is ([`Translate`]), and
//! the wrapper that composes the two ([`Translated`]). It knows nothing
//! about where strings are stored; `reslate-catalog` ships an in-memory
//! provider behind the same contract.
//!
//! # How it fits in the system
//! An application resolves its user-visible strings through some
//! `TextProvider`. Wrapping that provider in [`Translated`] is the only
//! integration step: every plain, formatted, and rich lookup comes back
//! translated, lookup failures propagate untouched, and quantity/array
//! lookups pass through verbatim.

pub mod provider;
pub mod text;
pub mod translate;
pub mod translated;

pub use provider::{LookupError, ResourceId, Result, TextProvider};
pub use text::{AttrSpan, RichText, TextAttrs};
pub use translate::{Translate, Verbatim};
pub use translated::Translated;
