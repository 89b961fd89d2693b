//! crates/verbosity/src/config.rs
//! Startup configuration for debug categories.
//!
//! Settings are written as `--debug`-style tokens: `search` enables the
//! category at level 1, `search3` at level 3, and `search=-1` stores an
//! explicit (possibly negative) level. Tokens are separated by commas or
//! whitespace.

use std::env;
use std::str::FromStr;

use crate::Level;
use crate::facility::DebugFacility;

mod error;

pub use error::{ParseLevelError, ParseLevelErrorKind};

/// Single `category -> level` assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSetting {
    /// Category name.
    pub category: String,
    /// Threshold to store for the category.
    pub level: Level,
}

impl LevelSetting {
    /// Creates a setting.
    pub fn new(category: impl Into<String>, level: Level) -> Self {
        Self {
            category: category.into(),
            level,
        }
    }

    /// Parses a single token such as `search`, `search2`, or `search=-1`.
    pub fn parse_token(token: &str) -> Result<Self, ParseLevelError> {
        let (category, level) = parse_level_token(token)?;
        Ok(Self::new(category, level))
    }
}

/// Ordered list of level settings applied to a [`DebugFacility`].
///
/// Later settings for the same category win, matching repeated calls to
/// [`DebugFacility::set_level`].
#[derive(Clone, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugConfig {
    /// Settings in application order.
    pub settings: Vec<LevelSetting>,
}

impl DebugConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma or whitespace separated list of tokens.
    ///
    /// An empty or blank string yields an empty configuration.
    ///
    /// ```
    /// use verbosity::DebugConfig;
    ///
    /// let config = DebugConfig::parse("search2, stats levelize=0")?;
    /// assert_eq!(config.settings.len(), 3);
    /// assert_eq!(config.settings[0].category, "search");
    /// assert_eq!(config.settings[0].level, 2);
    /// assert_eq!(config.settings[1].level, 1);
    /// # Ok::<(), verbosity::ParseLevelError>(())
    /// ```
    pub fn parse(spec: &str) -> Result<Self, ParseLevelError> {
        let mut config = Self::new();
        for token in spec
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
        {
            config.settings.push(LevelSetting::parse_token(token)?);
        }
        Ok(config)
    }

    /// Reads and parses the environment variable `var`.
    ///
    /// Returns `Ok(None)` when the variable is unset. A value that is not
    /// valid Unicode fails with [`ParseLevelErrorKind::InvalidEncoding`]; the
    /// error token holds the value with invalid bytes replaced by `U+FFFD`.
    pub fn from_env(var: &str) -> Result<Option<Self>, ParseLevelError> {
        match env::var(var) {
            Ok(spec) => Self::parse(&spec).map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(raw)) => Err(ParseLevelError::new(
                ParseLevelErrorKind::InvalidEncoding,
                &raw.to_string_lossy(),
            )),
        }
    }

    /// Appends a setting.
    pub fn push(&mut self, category: impl Into<String>, level: Level) {
        self.settings.push(LevelSetting::new(category, level));
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Reports whether the configuration holds no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Applies every setting to `facility` in order.
    pub fn apply(&self, facility: &DebugFacility) {
        for setting in &self.settings {
            facility.set_level(&setting.category, setting.level);
        }
    }
}

impl FromStr for DebugConfig {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits a token into its category and level.
///
/// `name=<int>` takes the explicit level. Otherwise trailing ASCII digits
/// form the level, so categories may contain digits elsewhere (`pass2sta3`
/// is category `pass2sta` at level 3). A token without digits means level 1.
fn parse_level_token(token: &str) -> Result<(&str, Level), ParseLevelError> {
    if token.is_empty() {
        return Err(ParseLevelError::new(ParseLevelErrorKind::EmptyToken, token));
    }

    let (name, level) = if let Some((name, level)) = token.split_once('=') {
        let level = level
            .parse::<Level>()
            .map_err(|_| ParseLevelError::new(ParseLevelErrorKind::InvalidLevel, token))?;
        (name, level)
    } else {
        let digits_at = token
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(index, _)| index);

        match digits_at {
            Some(index) => {
                let level = token[index..]
                    .parse::<Level>()
                    .map_err(|_| ParseLevelError::new(ParseLevelErrorKind::InvalidLevel, token))?;
                (&token[..index], level)
            }
            None => (token, 1),
        }
    };

    if name.is_empty() {
        return Err(ParseLevelError::new(
            ParseLevelErrorKind::EmptyCategory,
            token,
        ));
    }

    Ok((name, level))
}
