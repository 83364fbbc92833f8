//! Built-in game variants and TOML variant files.
//!
//! A variant file can start from a preset and add, remove or rewire moves:
//!
//! ```toml
//! extends = "classic"
//!
//! [[moves]]
//! name = "lizard"
//! beats = [{ move = "paper", verb = "eats" }]
//! loses_to = [{ move = "rock", verb = "crushes" }, { move = "scissors", verb = "decapitates" }]
//! ```

use crate::catalog::{Catalog, CatalogBuilder, DEFAULT_VERB};
use crate::error::ConfigurationError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Preset games.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Rock, paper, scissors.
    #[default]
    Classic,
    /// Rock, paper, scissors, lizard, Spock.
    LizardSpock,
}

const CLASSIC_MOVES: &[(&str, &str)] = &[("rock", "R"), ("paper", "P"), ("scissors", "S")];

const CLASSIC_RULES: &[(&str, &str, &str)] = &[
    ("rock", "scissors", "crushes"),
    ("paper", "rock", "covers"),
    ("scissors", "paper", "cuts"),
];

const LIZARD_SPOCK_MOVES: &[(&str, &str)] = &[
    ("rock", "R"),
    ("paper", "P"),
    ("scissors", "SC"),
    ("lizard", "L"),
    ("spock", "SP"),
];

const LIZARD_SPOCK_RULES: &[(&str, &str, &str)] = &[
    ("rock", "scissors", "crushes"),
    ("paper", "rock", "covers"),
    ("scissors", "paper", "cuts"),
    ("lizard", "spock", "poisons"),
    ("lizard", "paper", "eats"),
    ("scissors", "lizard", "decapitates"),
    ("rock", "lizard", "crushes"),
    ("spock", "scissors", "smashes"),
    ("spock", "rock", "vaporizes"),
    ("paper", "spock", "disproves"),
];

impl Variant {
    /// Moves of the preset as `(name, shortcut)`.
    pub fn moves(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Variant::Classic => CLASSIC_MOVES,
            Variant::LizardSpock => LIZARD_SPOCK_MOVES,
        }
    }

    /// Rules of the preset as `(winner, loser, verb)`.
    pub fn rules(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Variant::Classic => CLASSIC_RULES,
            Variant::LizardSpock => LIZARD_SPOCK_RULES,
        }
    }

    /// A builder preloaded with this preset.
    pub fn builder(self) -> CatalogBuilder {
        let builder = self
            .moves()
            .iter()
            .fold(CatalogBuilder::new(), |b, (name, shortcut)| {
                b.with_move_shortcut(*name, *shortcut)
            });
        self.rules()
            .iter()
            .fold(builder, |b, (winner, loser, verb)| b.beats(*winner, *loser, *verb))
    }

    /// Builds the preset catalog.
    #[instrument]
    pub fn catalog(self) -> Result<Catalog, ConfigurationError> {
        self.builder().build()
    }
}

/// One side of an interaction in a variant file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct Interaction {
    /// The other move.
    #[serde(rename = "move")]
    #[new(into)]
    target: String,

    /// How the winner defeats the loser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verb: Option<String>,
}

/// A move declared in a variant file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct MoveConfig {
    /// Move name.
    #[new(into)]
    name: String,

    /// Input shortcut, defaults to the first letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,

    /// Moves this move defeats.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    beats: Vec<Interaction>,

    /// Moves that defeat this move.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    loses_to: Vec<Interaction>,
}

/// A game variant as written in a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct VariantConfig {
    /// Preset to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extends: Option<Variant>,

    /// Preset moves to drop.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    without: Vec<String>,

    /// New or redefined moves.
    #[serde(default)]
    moves: Vec<MoveConfig>,
}

impl VariantConfig {
    /// Loads a variant from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        debug!("Loading variant from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigurationError::Read(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        info!(moves = config.moves.len(), extends = ?config.extends, "Variant loaded");
        Ok(config)
    }

    /// Parses a variant from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(content).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Writes the variant as TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(|e| ConfigurationError::Serialize(e.to_string()))
    }

    /// Describes an existing catalog as a standalone variant.
    #[instrument(skip(catalog), fields(moves = catalog.len()))]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let moves = catalog
            .moves()
            .map(|m| {
                let beats = catalog
                    .victims(m)
                    .into_iter()
                    .map(|loser| {
                        Interaction::new(
                            catalog.name(loser),
                            catalog.verb(m, loser).map(str::to_string),
                        )
                    })
                    .collect();
                MoveConfig::new(
                    catalog.name(m),
                    Some(catalog.shortcut(m).to_string()),
                    beats,
                    Vec::new(),
                )
            })
            .collect();
        Self::new(None, Vec::new(), moves)
    }

    /// Resolves presets and overrides, then validates the result.
    ///
    /// A pair mentioned anywhere in the file replaces whatever the preset
    /// said about that pair. Declarations inside the file must agree with
    /// each other.
    #[instrument(skip(self), fields(extends = ?self.extends))]
    pub fn build(&self) -> Result<Catalog, ConfigurationError> {
        let removed: HashSet<String> = self.without.iter().map(|n| key(n)).collect();
        let base = self.extends.map_or(&[][..], Variant::moves);
        if let Some(unknown) = removed
            .iter()
            .find(|r| !base.iter().any(|(n, _)| *n == r.as_str()))
        {
            return Err(ConfigurationError::UnknownMove(unknown.clone()));
        }

        let mut moves: Vec<(String, Option<String>)> = base
            .iter()
            .filter(|(name, _)| !removed.contains(*name))
            .map(|(name, shortcut)| (name.to_string(), Some(shortcut.to_string())))
            .collect();

        let mut declared: Vec<(String, String, String)> = Vec::new();
        let mut seen = HashSet::new();
        for config in &self.moves {
            let name = key(&config.name);
            if !seen.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateMove(name));
            }
            match moves.iter_mut().find(|(n, _)| *n == name) {
                Some(existing) => {
                    if config.shortcut.is_some() {
                        existing.1 = config.shortcut.clone();
                    }
                }
                None => moves.push((name.clone(), config.shortcut.clone())),
            }

            let verb = |i: &Interaction| i.verb.clone().unwrap_or_else(|| DEFAULT_VERB.to_string());
            for won in &config.beats {
                declared.push((name.clone(), key(&won.target), verb(won)));
            }
            for lost in &config.loses_to {
                declared.push((key(&lost.target), name.clone(), verb(lost)));
            }
        }

        let touched: HashSet<(&str, &str)> = declared
            .iter()
            .flat_map(|(w, l, _)| [(w.as_str(), l.as_str()), (l.as_str(), w.as_str())])
            .collect();
        let inherited = self
            .extends
            .map_or(&[][..], Variant::rules)
            .iter()
            .filter(|(w, l, _)| !removed.contains(*w) && !removed.contains(*l))
            .filter(|(w, l, _)| !touched.contains(&(*w, *l)));

        let mut builder = moves
            .into_iter()
            .fold(CatalogBuilder::new(), |b, (name, shortcut)| match shortcut {
                Some(shortcut) => b.with_move_shortcut(name, shortcut),
                None => b.with_move(name),
            });
        for (winner, loser, verb) in inherited {
            builder = builder.beats(*winner, *loser, *verb);
        }
        for (winner, loser, verb) in &declared {
            builder = builder.beats(winner.as_str(), loser.as_str(), verb.as_str());
        }

        debug!(declared = declared.len(), "Variant resolved");
        builder.build()
    }
}

/// Normalized spelling of a move name.
fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
