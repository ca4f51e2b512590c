use crate::type_chart::{
    is_standard_multiplier, TypeChart, NOT_VERY_EFFECTIVE, SUPER_EFFECTIVE,
};
use schema::{NeutralMessage, PokemonType};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const SUPER_EFFECTIVE_MESSAGE: &str = "It's super effective!";
pub const NOT_VERY_EFFECTIVE_MESSAGE: &str = "It's not very effective...";
pub const NEUTRAL_MESSAGE: &str = "Not anything special, you can do better!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Effectiveness {
    SuperEffective,
    NotVeryEffective,
    Neutral,
}

impl Effectiveness {
    /// Classify by exact comparison against the chart constants. Anything
    /// else is neutral; values outside 0.5/1.0/2.0 also log a warning.
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier == SUPER_EFFECTIVE {
            Effectiveness::SuperEffective
        } else if multiplier == NOT_VERY_EFFECTIVE {
            Effectiveness::NotVeryEffective
        } else {
            if !is_standard_multiplier(multiplier) {
                tracing::warn!(multiplier, "non-standard multiplier classified as neutral");
            }
            Effectiveness::Neutral
        }
    }

    pub fn message(&self, neutral: NeutralMessage) -> Option<&'static str> {
        match (self, neutral) {
            (Effectiveness::SuperEffective, _) => Some(SUPER_EFFECTIVE_MESSAGE),
            (Effectiveness::NotVeryEffective, _) => Some(NOT_VERY_EFFECTIVE_MESSAGE),
            (Effectiveness::Neutral, NeutralMessage::Descriptive) => Some(NEUTRAL_MESSAGE),
            (Effectiveness::Neutral, NeutralMessage::Silent) => None,
        }
    }

    pub fn sound(&self) -> SoundCue {
        match self {
            Effectiveness::SuperEffective => SoundCue::HitSuperEffective,
            Effectiveness::NotVeryEffective => SoundCue::HitNotEffective,
            Effectiveness::Neutral => SoundCue::HitRegular,
        }
    }
}

/// Identifier of the hit sound the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoundCue {
    HitSuperEffective,
    HitNotEffective,
    HitRegular,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::HitSuperEffective => "HitSuperEffective",
            SoundCue::HitNotEffective => "HitNotEffective",
            SoundCue::HitRegular => "HitRegular",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectivenessResult {
    pub multiplier: f64,
    pub effectiveness: Effectiveness,
    pub message: Option<&'static str>,
    pub sound: SoundCue,
}

/// Combines a type chart lookup with the message and sound for the result.
#[derive(Debug, Clone)]
pub struct EffectivenessResolver {
    chart: Arc<TypeChart>,
    neutral_message: NeutralMessage,
}

impl EffectivenessResolver {
    pub fn new(chart: Arc<TypeChart>, neutral_message: NeutralMessage) -> Self {
        Self {
            chart,
            neutral_message,
        }
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f64 {
        self.chart.multiplier(attacking, defending)
    }

    pub fn effectiveness_info(
        &self,
        attacking: PokemonType,
        defending: PokemonType,
    ) -> EffectivenessResult {
        self.classify(self.multiplier(attacking, defending))
    }

    pub fn classify(&self, multiplier: f64) -> EffectivenessResult {
        let effectiveness = Effectiveness::from_multiplier(multiplier);
        EffectivenessResult {
            multiplier,
            effectiveness,
            message: effectiveness.message(self.neutral_message),
            sound: effectiveness.sound(),
        }
    }
}

impl Default for EffectivenessResolver {
    fn default() -> Self {
        Self::new(Arc::new(TypeChart::standard()), NeutralMessage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use PokemonType::*;

    #[test]
    fn test_super_effective_info() {
        let resolver = EffectivenessResolver::default();
        assert_eq!(
            resolver.effectiveness_info(Water, Fire),
            EffectivenessResult {
                multiplier: 2.0,
                effectiveness: Effectiveness::SuperEffective,
                message: Some("It's super effective!"),
                sound: SoundCue::HitSuperEffective,
            }
        );
    }

    #[test]
    fn test_not_very_effective_info() {
        let resolver = EffectivenessResolver::default();
        let info = resolver.effectiveness_info(Fire, Water);
        assert_eq!(info.multiplier, 0.5);
        assert_eq!(info.message, Some("It's not very effective..."));
        assert_eq!(info.sound, SoundCue::HitNotEffective);
    }

    #[test]
    fn test_neutral_message_follows_config_flag() {
        let silent = EffectivenessResolver::default();
        let info = silent.effectiveness_info(Normal, Grass);
        assert_eq!(info.effectiveness, Effectiveness::Neutral);
        assert_eq!(info.message, None);
        assert_eq!(info.sound, SoundCue::HitRegular);

        let descriptive =
            EffectivenessResolver::new(Arc::new(TypeChart::standard()), NeutralMessage::Descriptive);
        let info = descriptive.effectiveness_info(Normal, Grass);
        assert_eq!(info.message, Some("Not anything special, you can do better!"));
        assert_eq!(info.sound, SoundCue::HitRegular);
    }

    #[rstest]
    #[case("super effective", 2.0, Effectiveness::SuperEffective)]
    #[case("not very effective", 0.5, Effectiveness::NotVeryEffective)]
    #[case("neutral", 1.0, Effectiveness::Neutral)]
    // Only the exact constants count.
    #[case("double super effective", 4.0, Effectiveness::Neutral)]
    #[case("double resisted", 0.25, Effectiveness::Neutral)]
    fn test_classification_depends_only_on_multiplier(
        #[case] desc: &str,
        #[case] multiplier: f64,
        #[case] expected: Effectiveness,
    ) {
        assert_eq!(
            Effectiveness::from_multiplier(multiplier),
            expected,
            "Failed: {}",
            desc
        );
    }

    #[test]
    fn test_unknown_type_is_neutral_with_regular_sound() {
        let resolver = EffectivenessResolver::default();
        let info = resolver.effectiveness_info(Electric, Water);
        assert_eq!(info.multiplier, 1.0);
        assert_eq!(info.sound, SoundCue::HitRegular);
    }

    #[test]
    fn test_extended_chart_multipliers_are_reported_as_neutral() {
        let config = [
            (Fire, Fire, 1.0),
            (Fire, Grass, 4.0),
            (Grass, Fire, 0.25),
            (Grass, Grass, 1.0),
        ]
        .map(|(attacking, defending, multiplier)| schema::TypeMatchup {
            attacking,
            defending,
            multiplier,
        });
        let chart = TypeChart::from_matchups(&config, &[0.25, 1.0, 4.0]).unwrap();
        assert_eq!(chart.nonstandard_multipliers(), vec![0.25, 4.0]);

        let resolver = EffectivenessResolver::new(Arc::new(chart), NeutralMessage::Silent);
        let info = resolver.effectiveness_info(Fire, Grass);
        assert_eq!(info.multiplier, 4.0);
        assert_eq!(info.effectiveness, Effectiveness::Neutral);
        assert_eq!(info.message, None);
        assert_eq!(info.sound, SoundCue::HitRegular);
    }
}
