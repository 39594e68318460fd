#![forbid(unsafe_code)]
//! Bidirectional codec between translation-unit records and XLIFF 1.2.
//!
//! Converts an ordered collection of translation units (key, source text,
//! target text, disambiguating context, developer comment, review state)
//! into a conformant XLIFF 1.2 document, and parses such a document back,
//! verifying key integrity along the way.
//!
//! # Quick Start
//!
//! ```rust
//! use xliffcodec::{Config, ConfigOptions, TranslationUnit, XliffCodec};
//!
//! let config = Config::resolve(ConfigOptions::new().with_context_strategy("extradata"))?;
//! let codec = XliffCodec::new(config, "en");
//!
//! let units = vec![TranslationUnit::new("Hello", "").with_target("Bonjour")];
//! let document = codec.serialize(&units, "app.pot", "fr")?;
//!
//! let outcome = codec.deserialize(&document)?;
//! assert_eq!(outcome.units, units_with_state_flag(units));
//! # fn units_with_state_flag(mut units: Vec<TranslationUnit>) -> Vec<TranslationUnit> {
//! #     for unit in &mut units { unit.flags.push("state-translated".to_string()); }
//! #     units
//! # }
//! # Ok::<(), xliffcodec::Error>(())
//! ```
//!
//! # Format variants
//!
//! Six options control the encoding (see [`ConfigOptions`]): where the
//! context is placed (`extradata` attribute, `resname` attribute, or an
//! id suffix), how untranslated entries are represented (empty target,
//! no target element, or no trans-unit at all), the resname hint for the
//! first comment line, the state vocabulary, and the file datatype.
//!
//! # Integrity
//!
//! Unit keys are derived deterministically from `(source, context)`
//! (see [`generate_key`]); the deserializer recomputes and compares
//! them, rejecting tampered or mismatched units with a structured
//! [`Diagnostic`] instead of silently importing bad data.

pub mod codec;
pub mod comment;
pub mod config;
pub mod deserializer;
pub mod error;
pub mod key;
pub mod locale;
pub mod serializer;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    codec::XliffCodec,
    config::{Config, ConfigOptions, ContextStrategy, UntranslatedStrategy},
    deserializer::{deserialize, deserialize_from_reader},
    error::Error,
    key::generate_key,
    locale::locale_code,
    serializer::{serialize, serialize_to_writer, XLIFF_NAMESPACE, XLIFF_VERSION},
    types::{Diagnostic, ParseOutcome, TranslationUnit},
};
