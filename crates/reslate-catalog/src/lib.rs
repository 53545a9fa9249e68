#![forbid(unsafe_code)]

//! In-memory string resource catalog behind the `reslate` provider contract.
//!
//! # Role in reslate
//! `reslate-catalog` is the reference storage layer: an id-keyed,
//! single-locale store that implements
//! [`TextProvider`](reslate::TextProvider) in full, including positional
//! interpolation for formatted lookups, CLDR-style plural selection, and
//! string arrays.
//!
//! # How it fits in the system
//! Applications can use [`Catalog`] directly, or wrap it in
//! [`Translated`](reslate::Translated) to get the same lookups with every
//! resolved string routed through a translation service. The crate depends
//! only on the contract, never the other way around, so any other backend
//! can replace it without touching callers.

pub mod catalog;
pub mod plural;

pub use catalog::{Catalog, Entry};
pub use plural::{PluralCategory, PluralForms, PluralRule};
