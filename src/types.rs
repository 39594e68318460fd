//! Core exchange types for xliffcodec.
//! The serializer consumes these; the deserializer reconstructs them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::key::generate_key;

/// A single translatable record exchanged with the orchestration engine.
///
/// `key` is derived from `source` and `context` (see [`generate_key`]);
/// the deserializer verifies that relation and rejects units where it
/// does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationUnit {
    /// Stable identifier, equal to `generate_key(source, context)`.
    pub key: String,

    /// Original text. May be empty.
    pub source: String,

    /// Translated text. Empty means "untranslated".
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub target: String,

    /// Disambiguation tag distinguishing identical source strings.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub context: String,

    /// Developer-facing note; may span multiple lines.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub comment: String,

    /// True when a translation is present but unconfirmed.
    #[serde(default)]
    pub fuzzy: bool,

    /// Ordered free-form flags. The deserializer appends a
    /// `state-<value>` entry when a state attribute was present.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub flags: Vec<String>,
}

impl TranslationUnit {
    /// Creates a unit with a freshly minted key and empty remaining fields.
    pub fn new(source: impl Into<String>, context: impl Into<String>) -> Self {
        let source = source.into();
        let context = context.into();
        TranslationUnit {
            key: generate_key(&source, &context),
            source,
            target: String::new(),
            context,
            comment: String::new(),
            fuzzy: false,
            flags: Vec::new(),
        }
    }

    /// Sets the translated text.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the developer comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Marks the translation as unconfirmed.
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TranslationUnit {{ key: {}, source: {}, target: {} }}",
            self.key, self.source, self.target
        )
    }
}

/// Result of one deserialize call: the accepted units in document order,
/// plus the non-fatal diagnostics raised while reading them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParseOutcome {
    pub units: Vec<TranslationUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Non-fatal, per-unit data issues raised during deserialization.
///
/// None of these abort the overall call; the affected unit is skipped or
/// adjusted as documented on each variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Diagnostic {
    /// A `trans-unit` had no `target` child; the unit is kept with an
    /// empty target.
    MissingTarget { key: String },

    /// A `trans-unit` resolved to an empty key; the unit is skipped.
    /// Carries the raw `id` attribute value.
    EmptyKey { id: String },

    /// The key did not match `generate_key(source, context)`; the unit
    /// is skipped.
    BadKey { key: String, context: String },

    /// The state attribute is not in the configured whitelist; the unit
    /// is kept but its target is cleared.
    InvalidState { key: String, state: String },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingTarget { key } => {
                write!(f, "missing target element for unit `{}`", key)
            }
            Diagnostic::EmptyKey { id } => {
                write!(f, "skipping unit with empty key (id: `{}`)", id)
            }
            Diagnostic::BadKey { key, context } => {
                write!(
                    f,
                    "key `{}` does not match its source text and context `{}`",
                    key, context
                )
            }
            Diagnostic::InvalidState { key, state } => {
                write!(f, "unit `{}` has invalid state `{}`; target dropped", key, state)
            }
        }
    }
}
