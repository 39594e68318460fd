//! Decoding of XLIFF 1.2 documents back into translation units.
//!
//! Parsing is a single forward pass over the XML event stream. Malformed
//! documents and unsupported versions fail the whole call; per-unit data
//! issues become [`Diagnostic`] values and never abort it.

use std::io::{BufRead, Cursor};

use quick_xml::{Reader, events::{BytesStart, Event}};

use crate::{
    comment::join_comment,
    config::{Config, ContextStrategy},
    error::Error,
    key::generate_key,
    types::{Diagnostic, ParseOutcome, TranslationUnit},
};

/// Parses an XLIFF document into the accepted units plus diagnostics.
pub fn deserialize(xliff: &str, config: &Config) -> Result<ParseOutcome, Error> {
    deserialize_from_reader(Cursor::new(xliff), config)
}

/// Parses an XLIFF document from any reader.
pub fn deserialize_from_reader<R: BufRead>(
    reader: R,
    config: &Config,
) -> Result<ParseOutcome, Error> {
    // No text trimming: unit text is opaque, and whitespace between
    // elements never reaches read_element_text.
    let mut xml = Reader::from_reader(reader);

    let mut buf = Vec::new();
    let mut outcome = ParseOutcome::default();
    let mut saw_root = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if !saw_root {
                    check_version(e)?;
                    saw_root = true;
                } else if e.name().as_ref() == b"trans-unit" {
                    let raw = parse_trans_unit(e, &mut xml)?;
                    accept_unit(raw, config, &mut outcome);
                }
            }
            Ok(Event::Empty(ref e)) => {
                if !saw_root {
                    check_version(e)?;
                    saw_root = true;
                } else if e.name().as_ref() == b"trans-unit" {
                    let raw = RawUnit::from_attributes(e)?;
                    accept_unit(raw, config, &mut outcome);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::parse(e.to_string())),
        }
        buf.clear();
    }
    Ok(outcome)
}

/// The `version` attribute is reduced to its leading integer component;
/// only major version 1 is accepted.
fn check_version(root: &BytesStart) -> Result<(), Error> {
    let version = attribute_value(root, b"version")?.unwrap_or_default();
    let major: String = version
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if major.parse::<u32>() == Ok(1) {
        Ok(())
    } else {
        Err(Error::UnsupportedVersion(version))
    }
}

/// One `trans-unit` as it appears on the wire, before validation.
#[derive(Debug, Default)]
struct RawUnit {
    id: String,
    extradata: Option<String>,
    resname: Option<String>,
    approved: Option<String>,
    notes: Vec<String>,
    source: Option<String>,
    target: Option<RawTarget>,
}

#[derive(Debug)]
struct RawTarget {
    text: String,
    state: Option<String>,
}

impl RawUnit {
    fn from_attributes(e: &BytesStart) -> Result<Self, Error> {
        let mut raw = RawUnit::default();
        for attr in e.attributes().with_checks(false) {
            let attr = attr.map_err(|err| Error::parse(err.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|err| Error::parse(err.to_string()))?;
            match attr.key.as_ref() {
                b"id" => raw.id = value.to_string(),
                b"extradata" => raw.extradata = Some(value.to_string()),
                b"resname" => raw.resname = Some(value.to_string()),
                b"approved" => raw.approved = Some(value.to_string()),
                _ => {}
            }
        }
        Ok(raw)
    }
}

fn attribute_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>, Error> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| Error::parse(err.to_string()))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::parse(err.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}

fn parse_trans_unit<R: BufRead>(e: &BytesStart, xml: &mut Reader<R>) -> Result<RawUnit, Error> {
    let mut raw = RawUnit::from_attributes(e)?;
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref child)) => match child.name().as_ref() {
                b"note" => {
                    let text = read_element_text(xml)?;
                    raw.notes.push(text);
                }
                b"source" => raw.source = Some(read_element_text(xml)?),
                b"target" => {
                    let state = attribute_value(child, b"state")?;
                    let text = read_element_text(xml)?;
                    raw.target = Some(RawTarget { text, state });
                }
                _ => {
                    // Unknown child; skip its whole subtree.
                    let end = child.to_end().into_owned();
                    let mut skip = Vec::new();
                    xml.read_to_end_into(end.name(), &mut skip)
                        .map_err(|err| Error::parse(err.to_string()))?;
                }
            },
            Ok(Event::Empty(ref child)) => match child.name().as_ref() {
                b"note" => raw.notes.push(String::new()),
                b"source" => raw.source = Some(String::new()),
                b"target" => {
                    raw.target = Some(RawTarget {
                        text: String::new(),
                        state: attribute_value(child, b"state")?,
                    })
                }
                _ => {}
            },
            Ok(Event::End(ref end)) if end.name().as_ref() == b"trans-unit" => break,
            Ok(Event::Eof) => {
                return Err(Error::parse("unexpected end of document inside trans-unit"));
            }
            Ok(_) => {}
            Err(err) => return Err(Error::parse(err.to_string())),
        }
        buf.clear();
    }
    Ok(raw)
}

/// Collects the text content of the element just opened, tolerating
/// nested inline markup, until the matching end tag.
fn read_element_text<R: BufRead>(xml: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let fragment = e.unescape().map_err(|err| Error::parse(err.to_string()))?;
                text.push_str(&fragment);
            }
            Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Eof) => {
                return Err(Error::parse("unexpected end of document inside element"));
            }
            Ok(_) => {}
            Err(err) => return Err(Error::parse(err.to_string())),
        }
        buf.clear();
    }
    Ok(text)
}

/// Validates one raw unit and appends it (or diagnostics) to the outcome.
fn accept_unit(raw: RawUnit, config: &Config, outcome: &mut ParseOutcome) {
    let (key, context, resname_line) = match config.context_strategy {
        ContextStrategy::Extradata => (
            raw.id.clone(),
            raw.extradata.clone().unwrap_or_default(),
            raw.resname.clone(),
        ),
        ContextStrategy::Resname => (
            raw.id.clone(),
            raw.resname.clone().unwrap_or_default(),
            None,
        ),
        // Split on the first colon only; the context may itself contain colons.
        ContextStrategy::Id => match raw.id.split_once(':') {
            Some((key, context)) => (key.to_string(), context.to_string(), None),
            None => (raw.id.clone(), String::new(), None),
        },
    };

    let comment = join_comment(resname_line.as_deref(), &raw.notes);

    let (mut target, state) = match raw.target {
        Some(target) => (target.text, target.state.unwrap_or_default()),
        None => {
            outcome
                .diagnostics
                .push(Diagnostic::MissingTarget { key: key.clone() });
            (String::new(), String::new())
        }
    };

    let mut flags = Vec::new();
    if !state.is_empty() {
        flags.push(format!("state-{}", state));
    }

    let source = raw.source.unwrap_or_default();
    let fuzzy = raw.approved.as_deref() == Some("no");

    if key.is_empty() {
        outcome.diagnostics.push(Diagnostic::EmptyKey { id: raw.id });
        return;
    }
    if key != generate_key(&source, &context) {
        outcome.diagnostics.push(Diagnostic::BadKey { key, context });
        return;
    }
    if !state.is_empty() && !config.is_valid_state(&state) {
        outcome.diagnostics.push(Diagnostic::InvalidState {
            key: key.clone(),
            state: state.clone(),
        });
        target.clear();
    }
    if target.is_empty() && comment.is_empty() {
        return;
    }

    outcome.units.push(TranslationUnit {
        key,
        source,
        target,
        context,
        comment,
        fuzzy,
        flags,
    });
}
