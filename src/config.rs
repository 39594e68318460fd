//! Configuration resolution for the XLIFF codec.
//!
//! Callers describe the variant they want through [`ConfigOptions`] (all
//! fields optional) and resolve it once into an immutable [`Config`]
//! consumed by the serializer and deserializer.

use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;

/// Where the disambiguation context is placed in the document.
///
/// Exactly one placement carries the context; the other two are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextStrategy {
    /// Context goes into the `extradata` attribute.
    #[default]
    Extradata,
    /// Context goes into the `resname` attribute.
    Resname,
    /// Context is appended to the unit id as `key:context`.
    Id,
}

impl Display for ContextStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextStrategy::Extradata => write!(f, "extradata"),
            ContextStrategy::Resname => write!(f, "resname"),
            ContextStrategy::Id => write!(f, "id"),
        }
    }
}

impl FromStr for ContextStrategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "extradata" => Ok(ContextStrategy::Extradata),
            "resname" => Ok(ContextStrategy::Resname),
            "id" => Ok(ContextStrategy::Id),
            other => Err(Error::InvalidConfig(format!(
                "unknown context_strategy `{}` (expected `extradata`, `resname` or `id`)",
                other
            ))),
        }
    }
}

/// How a unit with an empty target is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UntranslatedStrategy {
    /// Emit a `target` element with empty text.
    #[default]
    EmptyTarget,
    /// Emit the `trans-unit` without a `target` element.
    NoTarget,
    /// Omit the `trans-unit` from the document entirely.
    NoTransUnit,
}

impl Display for UntranslatedStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UntranslatedStrategy::EmptyTarget => write!(f, "emptytarget"),
            UntranslatedStrategy::NoTarget => write!(f, "notarget"),
            UntranslatedStrategy::NoTransUnit => write!(f, "notransunit"),
        }
    }
}

impl FromStr for UntranslatedStrategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "emptytarget" => Ok(UntranslatedStrategy::EmptyTarget),
            "notarget" => Ok(UntranslatedStrategy::NoTarget),
            "notransunit" => Ok(UntranslatedStrategy::NoTransUnit),
            other => Err(Error::InvalidConfig(format!(
                "unknown untranslated_strategy `{}` (expected `emptytarget`, `notarget` or `notransunit`)",
                other
            ))),
        }
    }
}

/// Partially specified configuration, as it arrives from a config file or
/// CLI layer. Unset fields take their documented defaults on resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigOptions {
    /// First comment line becomes the `resname` attribute (only active
    /// under the `extradata` context strategy). Default: `true`.
    pub use_hint_for_resname: Option<bool>,
    /// Context placement, as a wire spelling. Default: `extradata`.
    pub context_strategy: Option<String>,
    /// Space-separated whitelist of acceptable decode-time state values.
    /// Default: empty, meaning every state is valid.
    pub valid_states: Option<String>,
    /// Value of the `datatype` attribute on the `file` element.
    /// Default: `x-unknown`.
    pub file_datatype: Option<String>,
    /// State value written when the target is non-empty. Default: `translated`.
    pub state_translated: Option<String>,
    /// State value written when the target is empty. Default: `new`.
    pub state_untranslated: Option<String>,
    /// Representation of untranslated entries. Default: `emptytarget`.
    pub untranslated_strategy: Option<String>,
}

impl ConfigOptions {
    /// Creates empty options; resolving them yields the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_hint_for_resname(mut self, value: bool) -> Self {
        self.use_hint_for_resname = Some(value);
        self
    }

    pub fn with_context_strategy(mut self, value: impl Into<String>) -> Self {
        self.context_strategy = Some(value.into());
        self
    }

    pub fn with_valid_states(mut self, value: impl Into<String>) -> Self {
        self.valid_states = Some(value.into());
        self
    }

    pub fn with_file_datatype(mut self, value: impl Into<String>) -> Self {
        self.file_datatype = Some(value.into());
        self
    }

    pub fn with_state_translated(mut self, value: impl Into<String>) -> Self {
        self.state_translated = Some(value.into());
        self
    }

    pub fn with_state_untranslated(mut self, value: impl Into<String>) -> Self {
        self.state_untranslated = Some(value.into());
        self
    }

    pub fn with_untranslated_strategy(mut self, value: impl Into<String>) -> Self {
        self.untranslated_strategy = Some(value.into());
        self
    }
}

/// Fully resolved, immutable configuration shared by both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub use_hint_for_resname: bool,
    pub context_strategy: ContextStrategy,
    /// Empty set means "all states are valid".
    pub valid_states: HashSet<String>,
    pub file_datatype: String,
    pub state_translated: String,
    pub state_untranslated: String,
    pub untranslated_strategy: UntranslatedStrategy,
}

impl Config {
    /// Validates and defaults the given options.
    ///
    /// Fails with [`Error::InvalidConfig`] when `context_strategy` or
    /// `untranslated_strategy` holds a value outside its domain. This is
    /// the only validation point; serialize/deserialize assume a valid
    /// configuration.
    pub fn resolve(options: ConfigOptions) -> Result<Self, Error> {
        let mut config = Config::default();
        if let Some(value) = options.use_hint_for_resname {
            config.use_hint_for_resname = value;
        }
        if let Some(value) = options.context_strategy {
            config.context_strategy = value.parse()?;
        }
        if let Some(value) = options.valid_states {
            config.valid_states = value.split_whitespace().map(str::to_string).collect();
        }
        if let Some(value) = options.file_datatype {
            config.file_datatype = value;
        }
        if let Some(value) = options.state_translated {
            config.state_translated = value;
        }
        if let Some(value) = options.state_untranslated {
            config.state_untranslated = value;
        }
        if let Some(value) = options.untranslated_strategy {
            config.untranslated_strategy = value.parse()?;
        }
        Ok(config)
    }

    /// True when `state` passes the configured whitelist.
    pub(crate) fn is_valid_state(&self, state: &str) -> bool {
        self.valid_states.is_empty() || self.valid_states.contains(state)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_hint_for_resname: true,
            context_strategy: ContextStrategy::Extradata,
            valid_states: HashSet::new(),
            file_datatype: "x-unknown".to_string(),
            state_translated: "translated".to_string(),
            state_untranslated: "new".to_string(),
            untranslated_strategy: UntranslatedStrategy::EmptyTarget,
        }
    }
}
