//! Whole-document fixture tests for the XLIFF codec.

use xliffcodec::{
    Config, ConfigOptions, Diagnostic, Error, TranslationUnit, XliffCodec, generate_key,
};

fn codec_with(options: ConfigOptions) -> XliffCodec {
    XliffCodec::new(Config::resolve(options).expect("options resolve"), "en")
}

#[test]
fn translated_unit_document_shape() {
    // Example A: a translated unit under the default configuration.
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "").with_target("Bonjour");
    let document = codec.serialize(&[unit], "messages.pot", "fr").unwrap();

    assert!(document.contains("approved=\"yes\""));
    assert!(document.contains("<source xml:lang=\"en\">Hello</source>"));
    assert!(document.contains("<target xml:lang=\"fr\" state=\"translated\">Bonjour</target>"));
}

#[test]
fn untranslated_unit_document_shape() {
    // Example B: same unit with an empty target, emptytarget strategy.
    let codec = codec_with(ConfigOptions::new().with_untranslated_strategy("emptytarget"));
    let unit = TranslationUnit::new("Hello", "");
    let document = codec.serialize(&[unit], "messages.pot", "fr").unwrap();

    assert!(document.contains("<target xml:lang=\"fr\" state=\"new\"></target>"));
}

#[test]
fn notransunit_leaves_no_trace_of_untranslated_units() {
    let codec = codec_with(ConfigOptions::new().with_untranslated_strategy("notransunit"));
    let translated = TranslationUnit::new("Yes", "").with_target("Oui");
    let untranslated = TranslationUnit::new("No", "");
    let document = codec
        .serialize(&[translated, untranslated.clone()], "messages.pot", "fr")
        .unwrap();

    assert!(!document.contains(&untranslated.key));
    assert!(!document.contains(">No<"));
    assert_eq!(document.matches("<trans-unit").count(), 1);
}

#[test]
fn notarget_keeps_unit_without_target_child() {
    let codec = codec_with(ConfigOptions::new().with_untranslated_strategy("notarget"));
    let untranslated = TranslationUnit::new("No", "");
    let document = codec
        .serialize(&[untranslated.clone()], "messages.pot", "fr")
        .unwrap();

    assert!(document.contains(&untranslated.key));
    assert!(!document.contains("<target"));
}

#[test]
fn version_two_document_is_rejected() {
    let codec = XliffCodec::new(Config::default(), "en");
    let document = r#"<?xml version="1.0" encoding="utf-8"?>
<xliff xmlns="urn:oasis:names:tc:xliff:document:2.0" version="2.0">
    <file id="f1"><unit id="u1"/></file>
</xliff>"#;
    let err = codec.deserialize(document).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion(v) if v == "2.0"));
}

#[test]
fn tampered_id_is_rejected_with_bad_key_diagnostic() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "").with_target("Bonjour");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    let tampered = document.replace(&unit.key, "wrong");
    let outcome = codec.deserialize(&tampered).unwrap();
    assert!(outcome.units.is_empty());
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::BadKey {
            key: "wrong".to_string(),
            context: String::new(),
        }]
    );
}

#[test]
fn tampered_source_text_is_rejected() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "").with_target("Bonjour");
    let document = codec.serialize(&[unit], "messages.pot", "fr").unwrap();

    let tampered = document.replace(">Hello<", ">Goodbye<");
    let outcome = codec.deserialize(&tampered).unwrap();
    assert!(outcome.units.is_empty());
    assert!(matches!(
        outcome.diagnostics.as_slice(),
        [Diagnostic::BadKey { .. }]
    ));
}

#[test]
fn context_survives_every_strategy() {
    for strategy in ["extradata", "resname", "id"] {
        let codec = codec_with(ConfigOptions::new().with_context_strategy(strategy));
        let unit = TranslationUnit::new("Open", "verb").with_target("Ouvrir");
        let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();
        let outcome = codec.deserialize(&document).unwrap();

        assert!(
            outcome.diagnostics.is_empty(),
            "strategy {strategy}: {:?}",
            outcome.diagnostics
        );
        assert_eq!(outcome.units.len(), 1, "strategy {strategy}");
        assert_eq!(outcome.units[0].context, "verb", "strategy {strategy}");
        assert_eq!(outcome.units[0].key, unit.key, "strategy {strategy}");
    }
}

#[test]
fn strategies_do_not_read_each_others_placement() {
    // A document written under the id strategy carries the context in the
    // id suffix. Reading it back under extradata must not find a context,
    // and the now-unsplit id no longer matches the key.
    let writer = codec_with(ConfigOptions::new().with_context_strategy("id"));
    let reader = codec_with(ConfigOptions::new().with_context_strategy("extradata"));
    let unit = TranslationUnit::new("Open", "verb").with_target("Ouvrir");
    let document = writer.serialize(&[unit], "messages.pot", "fr").unwrap();

    let outcome = reader.deserialize(&document).unwrap();
    assert!(outcome.units.is_empty());
    assert!(matches!(
        outcome.diagnostics.as_slice(),
        [Diagnostic::BadKey { .. }]
    ));
}

#[test]
fn comment_with_resname_hint_round_trips() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "")
        .with_target("Bonjour")
        .with_comment("GreetingLabel\nshown on the login page\nkeep informal");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    assert!(document.contains("resname=\"GreetingLabel\""));
    let outcome = codec.deserialize(&document).unwrap();
    assert_eq!(outcome.units[0].comment, unit.comment);
}

#[test]
fn multiline_comment_without_hint_round_trips() {
    let codec = codec_with(ConfigOptions::new().with_use_hint_for_resname(false));
    let unit = TranslationUnit::new("Hello", "")
        .with_target("Bonjour")
        .with_comment("first line\nsecond line");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    assert!(!document.contains("resname"));
    let outcome = codec.deserialize(&document).unwrap();
    assert_eq!(outcome.units[0].comment, unit.comment);
}

#[test]
fn fuzzy_flag_round_trips_through_approved() {
    let codec = XliffCodec::new(Config::default(), "en");
    let confirmed = TranslationUnit::new("One", "").with_target("Un");
    let fuzzy = TranslationUnit::new("Two", "").with_target("Deux").with_fuzzy(true);
    let document = codec
        .serialize(&[confirmed, fuzzy], "messages.pot", "fr")
        .unwrap();

    let outcome = codec.deserialize(&document).unwrap();
    assert!(!outcome.units[0].fuzzy);
    assert!(outcome.units[1].fuzzy);
}

#[test]
fn state_whitelist_drops_targets_of_foreign_states() {
    // Written with a custom translated-state the reader does not accept.
    let writer = codec_with(ConfigOptions::new().with_state_translated("signed-off"));
    let reader = codec_with(
        ConfigOptions::new()
            .with_valid_states("translated final")
            .with_use_hint_for_resname(false),
    );
    let unit = TranslationUnit::new("Hello", "")
        .with_target("Bonjour")
        .with_comment("greeting");
    let document = writer.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    let outcome = reader.deserialize(&document).unwrap();
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::InvalidState {
            key: unit.key.clone(),
            state: "signed-off".to_string(),
        }]
    );
    assert_eq!(outcome.units.len(), 1);
    assert!(outcome.units[0].target.is_empty());
}

#[test]
fn same_language_export_omits_target_metadata() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "").with_target("Hello");
    let document = codec.serialize(&[unit], "messages.pot", "en").unwrap();

    assert!(!document.contains("target-language"));
    assert!(!document.contains("approved"));
    assert!(!document.contains("<target"));
}

#[test]
fn unicode_text_round_trips() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Welcome, friend!", "greeting — формальное")
        .with_target("ようこそ、友よ！");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "ja").unwrap();

    let outcome = codec.deserialize(&document).unwrap();
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.units[0].source, unit.source);
    assert_eq!(outcome.units[0].target, unit.target);
    assert_eq!(outcome.units[0].context, unit.context);
}

#[test]
fn surrounding_whitespace_round_trips_without_misfiring_tamper_check() {
    // Text is opaque: padding must survive the round trip rather than be
    // trimmed into a key mismatch.
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new(" Hello ", "").with_target("  Bonjour ");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    let outcome = codec.deserialize(&document).unwrap();
    assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.units.len(), 1);
    assert_eq!(outcome.units[0].key, unit.key);
    assert_eq!(outcome.units[0].source, " Hello ");
    assert_eq!(outcome.units[0].target, "  Bonjour ");
}

#[test]
fn whitespace_in_comment_lines_round_trips() {
    let codec = XliffCodec::new(Config::default(), "en");
    let unit = TranslationUnit::new("Hello", "")
        .with_target("Bonjour")
        .with_comment("Label \n  indented note ");
    let document = codec.serialize(&[unit.clone()], "messages.pot", "fr").unwrap();

    let outcome = codec.deserialize(&document).unwrap();
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.units[0].comment, unit.comment);
}

#[test]
fn empty_key_units_are_reported_and_skipped() {
    let key = generate_key("Kept", "");
    let codec = XliffCodec::new(Config::default(), "en");
    let document = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<xliff xmlns="urn:oasis:names:tc:xliff:document:1.2" version="1.2">
    <file original="messages.pot" source-language="en" datatype="x-unknown" target-language="fr">
        <body>
            <trans-unit id="">
                <source xml:lang="en">Dropped</source>
                <target xml:lang="fr">Tombé</target>
            </trans-unit>
            <trans-unit id="{key}">
                <source xml:lang="en">Kept</source>
                <target xml:lang="fr">Gardé</target>
            </trans-unit>
        </body>
    </file>
</xliff>"#
    );

    let outcome = codec.deserialize(&document).unwrap();
    assert_eq!(outcome.units.len(), 1);
    assert_eq!(outcome.units[0].source, "Kept");
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::EmptyKey { id: String::new() }]
    );
}
