//! High-level entry point binding a resolved configuration to a project
//! source language.

use std::io::{BufRead, Write};

use crate::{
    config::Config,
    deserializer, error::Error,
    serializer,
    types::{ParseOutcome, TranslationUnit},
};

/// An XLIFF 1.2 codec for one project.
///
/// Holds the immutable [`Config`] and the project source language; each
/// `serialize`/`deserialize` call is an independent, pure transformation,
/// so one codec value can serve concurrent documents.
///
/// # Example
///
/// ```rust
/// use xliffcodec::{Config, TranslationUnit, XliffCodec};
///
/// let codec = XliffCodec::new(Config::default(), "en");
/// let units = vec![TranslationUnit::new("Hello", "").with_target("Bonjour")];
/// let document = codec.serialize(&units, "app.pot", "fr")?;
/// let outcome = codec.deserialize(&document)?;
/// assert_eq!(outcome.units[0].target, "Bonjour");
/// # Ok::<(), xliffcodec::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct XliffCodec {
    config: Config,
    source_lang: String,
}

impl XliffCodec {
    /// Creates a codec from a resolved configuration and a source language tag.
    pub fn new(config: Config, source_lang: impl Into<String>) -> Self {
        XliffCodec {
            config,
            source_lang: source_lang.into(),
        }
    }

    /// The resolved configuration this codec was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The project source language tag.
    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    /// Serializes `units` into an XLIFF document for `target_lang`.
    pub fn serialize(
        &self,
        units: &[TranslationUnit],
        file_id: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        serializer::serialize(units, file_id, &self.source_lang, target_lang, &self.config)
    }

    /// Serializes `units` to any writer.
    pub fn serialize_to_writer<W: Write>(
        &self,
        units: &[TranslationUnit],
        file_id: &str,
        target_lang: &str,
        writer: W,
    ) -> Result<(), Error> {
        serializer::serialize_to_writer(
            units,
            file_id,
            &self.source_lang,
            target_lang,
            &self.config,
            writer,
        )
    }

    /// Parses an XLIFF document into units plus diagnostics.
    pub fn deserialize(&self, xliff: &str) -> Result<ParseOutcome, Error> {
        deserializer::deserialize(xliff, &self.config)
    }

    /// Parses an XLIFF document from any reader.
    pub fn deserialize_from_reader<R: BufRead>(&self, reader: R) -> Result<ParseOutcome, Error> {
        deserializer::deserialize_from_reader(reader, &self.config)
    }
}
