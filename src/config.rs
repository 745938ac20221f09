//! Evaluator tuning.
//!
//! Every constant the scoring rules consult lives here so a tuning can be
//! loaded from JSON and swapped without touching the evaluator. Missing
//! fields fall back to the defaults.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::classic::DEFAULT_BORDER_TERRITORIES;
use crate::board::{Board, TerritoryId};
use crate::error::{AgentError, Result};
use crate::eval::combat::CombatWeighting;
use crate::eval::threat::ThreatThreshold;

/// Immutable configuration handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Static priority weight per continent name. Unlisted continents weigh 0.
    pub continent_weights: BTreeMap<String, f64>,
    /// Territories that earn the border bonus when claimed or reinforced.
    pub border_territories: BTreeSet<TerritoryId>,
    pub border_bonus: f64,
    pub threat_threshold: ThreatThreshold,
    /// Multiplier applied to a continent's reward when it is nearly swept.
    pub threat_amplification: f64,
    /// Added per differently-owned neighbor of a placement target.
    pub place_frontier_increment: f64,
    pub fortify_skip_score: f64,
    pub fortify_frontier_bonus: f64,
    pub combat_weighting: CombatWeighting,
    /// Allowed distance of a simulation's probability total from one.
    pub probability_tolerance: f64,
    /// Scoring worker threads; 1 scores on the calling thread.
    pub workers: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        let continent_weights = [
            ("N. America", 0.0),
            ("S. America", 3.0),
            ("Africa", 0.0),
            ("Europe", 0.0),
            ("Asia", 0.0),
            ("Australia", 3.0),
        ]
        .into_iter()
        .map(|(name, w)| (name.to_string(), w))
        .collect();

        EvaluatorConfig {
            continent_weights,
            border_territories: DEFAULT_BORDER_TERRITORIES.iter().copied().collect(),
            border_bonus: 1.0,
            threat_threshold: ThreatThreshold::PlayerCount,
            threat_amplification: 5.0,
            place_frontier_increment: 0.5,
            fortify_skip_score: -1.0,
            fortify_frontier_bonus: 1.0,
            combat_weighting: CombatWeighting::Weighted,
            probability_tolerance: 1e-6,
            workers: 1,
        }
    }
}

impl EvaluatorConfig {
    /// Parses a configuration from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: EvaluatorConfig =
            serde_json::from_str(s).map_err(|e| AgentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| AgentError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    /// Replaces the border set with the one derived from the board's adjacency.
    pub fn with_derived_borders(mut self, board: &Board) -> Self {
        self.border_territories = board.derived_borders();
        self
    }

    /// Returns the static weight of a continent, zero if unlisted.
    pub fn continent_weight(&self, continent: &str) -> f64 {
        self.continent_weights.get(continent).copied().unwrap_or(0.0)
    }

    /// Returns true if `territory` earns the border bonus.
    pub fn is_border(&self, territory: TerritoryId) -> bool {
        self.border_territories.contains(&territory)
    }

    /// Checks that every weighted continent and border territory exists on
    /// `board`.
    pub fn check_against(&self, board: &Board) -> Result<()> {
        for name in self.continent_weights.keys() {
            if board.continent_by_name(name).is_none() {
                return Err(AgentError::Config(format!("unknown continent '{}'", name)));
            }
        }
        for &t in &self.border_territories {
            if t >= board.territory_count() {
                return Err(AgentError::Config(format!(
                    "border territory {} is outside the board",
                    t
                )));
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(AgentError::Config("workers must be at least 1".into()));
        }
        if self.probability_tolerance.is_nan() || self.probability_tolerance < 0.0 {
            return Err(AgentError::Config(
                "probability_tolerance must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_tuning() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.continent_weight("S. America"), 3.0);
        assert_eq!(config.continent_weight("Australia"), 3.0);
        assert_eq!(config.continent_weight("Asia"), 0.0);
        assert_eq!(config.continent_weight("Atlantis"), 0.0);
        assert!(config.is_border(9));
        assert!(!config.is_border(11));
        assert_eq!(config.border_territories.len(), 17);
        assert_eq!(config.threat_amplification, 5.0);
        assert_eq!(config.place_frontier_increment, 0.5);
        assert_eq!(config.fortify_skip_score, -1.0);
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EvaluatorConfig::from_json_str(
            r#"{"threat_threshold": {"Fixed": 2}, "combat_weighting": "Unweighted"}"#,
        )
        .unwrap();
        assert_eq!(config.threat_threshold, ThreatThreshold::Fixed(2));
        assert_eq!(config.combat_weighting, CombatWeighting::Unweighted);
        assert_eq!(config.border_bonus, 1.0);
        assert_eq!(config.continent_weight("S. America"), 3.0);
    }

    #[test]
    fn json_roundtrip() {
        let config = EvaluatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EvaluatorConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        assert!(matches!(
            EvaluatorConfig::from_json_str("{not json"),
            Err(AgentError::Config(_))
        ));
        assert!(matches!(
            EvaluatorConfig::from_json_str(r#"{"workers": 0}"#),
            Err(AgentError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            EvaluatorConfig::load("/nonexistent/warlord.json"),
            Err(AgentError::Config(_))
        ));
    }

    #[test]
    fn defaults_match_the_classic_board() {
        assert!(EvaluatorConfig::default().check_against(&Board::classic()).is_ok());
    }

    #[test]
    fn misspelled_continent_is_rejected() {
        let config =
            EvaluatorConfig::from_json_str(r#"{"continent_weights": {"South America": 3.0}}"#).unwrap();
        assert!(matches!(
            config.check_against(&Board::classic()),
            Err(AgentError::Config(ref m)) if m.contains("South America")
        ));
        let config = EvaluatorConfig::from_json_str(r#"{"border_territories": [9, 42]}"#).unwrap();
        assert!(matches!(
            config.check_against(&Board::classic()),
            Err(AgentError::Config(_))
        ));
    }

    #[test]
    fn derived_borders_include_east_africa() {
        let board = Board::classic();
        let config = EvaluatorConfig::default().with_derived_borders(&board);
        assert!(config.is_border(18));
        assert_eq!(config.border_territories.len(), 18);
    }
}
