//! Encoding of translation units into XLIFF 1.2 documents.
//!
//! A pure, single-pass transformation: units are written in caller order,
//! with context placement, untranslated-entry handling, and state values
//! driven by the resolved [`Config`].

use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    comment::split_comment,
    config::{Config, ContextStrategy, UntranslatedStrategy},
    error::Error,
    locale::locale_code,
    types::TranslationUnit,
};

/// The XLIFF 1.2 namespace written on the root element.
pub const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// The XLIFF version this codec emits.
pub const XLIFF_VERSION: &str = "1.2";

/// Serializes `units` into a complete XLIFF 1.2 document.
///
/// `file_id` becomes the `original` attribute of the `file` element;
/// `target-language` is written only when `target_lang` differs from
/// `source_lang`. Unit order in the document equals input order.
pub fn serialize(
    units: &[TranslationUnit],
    file_id: &str,
    source_lang: &str,
    target_lang: &str,
    config: &Config,
) -> Result<String, Error> {
    let mut buf = Vec::new();
    serialize_to_writer(units, file_id, source_lang, target_lang, config, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::DataMismatch(e.to_string()))
}

/// Writes the XLIFF document to any writer (file, memory, etc.).
pub fn serialize_to_writer<W: Write>(
    units: &[TranslationUnit],
    file_id: &str,
    source_lang: &str,
    target_lang: &str,
    config: &Config,
    writer: W,
) -> Result<(), Error> {
    let mut xml = Writer::new_with_indent(writer, b' ', 4);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut xliff = BytesStart::new("xliff");
    xliff.push_attribute(("xmlns", XLIFF_NAMESPACE));
    xliff.push_attribute(("version", XLIFF_VERSION));
    xml.write_event(Event::Start(xliff))?;

    let translating = target_lang != source_lang;
    let source_locale = locale_code(source_lang);
    let target_locale = locale_code(target_lang);

    let mut file = BytesStart::new("file");
    file.push_attribute(("original", file_id));
    file.push_attribute(("source-language", source_locale.as_str()));
    file.push_attribute(("datatype", config.file_datatype.as_str()));
    if translating {
        file.push_attribute(("target-language", target_locale.as_str()));
    }
    xml.write_event(Event::Start(file))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;

    for unit in units {
        if unit.key.is_empty() {
            continue;
        }
        if unit.target.is_empty()
            && config.untranslated_strategy == UntranslatedStrategy::NoTransUnit
        {
            continue;
        }
        write_trans_unit(
            &mut xml,
            unit,
            config,
            &source_locale,
            &target_locale,
            translating,
        )?;
    }

    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("file")))?;
    xml.write_event(Event::End(BytesEnd::new("xliff")))?;
    Ok(())
}

fn write_trans_unit<W: Write>(
    xml: &mut Writer<W>,
    unit: &TranslationUnit,
    config: &Config,
    source_locale: &str,
    target_locale: &str,
    translating: bool,
) -> Result<(), Error> {
    // The resname hint only activates under the extradata strategy, so it
    // can never collide with a context-carrying resname attribute.
    let take_hint =
        config.use_hint_for_resname && config.context_strategy == ContextStrategy::Extradata;
    let (resname_hint, notes) = split_comment(&unit.comment, take_hint);

    let mut id = unit.key.clone();
    if config.context_strategy == ContextStrategy::Id && !unit.context.is_empty() {
        id.push(':');
        id.push_str(&unit.context);
    }

    let mut elem = BytesStart::new("trans-unit");
    elem.push_attribute(("id", id.as_str()));
    if !unit.context.is_empty() {
        match config.context_strategy {
            ContextStrategy::Extradata => {
                elem.push_attribute(("extradata", unit.context.as_str()))
            }
            ContextStrategy::Resname => elem.push_attribute(("resname", unit.context.as_str())),
            ContextStrategy::Id => {} // already folded into the id
        }
    }
    if let Some(resname) = &resname_hint {
        elem.push_attribute(("resname", resname.as_str()));
    }
    if translating {
        elem.push_attribute(("approved", if unit.fuzzy { "no" } else { "yes" }));
    }
    xml.write_event(Event::Start(elem))?;

    for line in &notes {
        let mut note = BytesStart::new("note");
        note.push_attribute(("from", "developer"));
        xml.write_event(Event::Start(note))?;
        xml.write_event(Event::Text(BytesText::new(line)))?;
        xml.write_event(Event::End(BytesEnd::new("note")))?;
    }

    let mut source = BytesStart::new("source");
    source.push_attribute(("xml:lang", source_locale));
    xml.write_event(Event::Start(source))?;
    xml.write_event(Event::Text(BytesText::new(&unit.source)))?;
    xml.write_event(Event::End(BytesEnd::new("source")))?;

    let omit_target =
        unit.target.is_empty() && config.untranslated_strategy == UntranslatedStrategy::NoTarget;
    if translating && !omit_target {
        let mut target = BytesStart::new("target");
        target.push_attribute(("xml:lang", target_locale));
        let state = if unit.target.is_empty() {
            config.state_untranslated.as_str()
        } else {
            config.state_translated.as_str()
        };
        if !state.is_empty() {
            target.push_attribute(("state", state));
        }
        xml.write_event(Event::Start(target))?;
        xml.write_event(Event::Text(BytesText::new(&unit.target)))?;
        xml.write_event(Event::End(BytesEnd::new("target")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("trans-unit")))?;
    Ok(())
}
