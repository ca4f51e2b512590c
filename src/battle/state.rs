use crate::effectiveness::EffectivenessResult;
use crate::progression::ExperienceAward;
use serde::Serialize;
use std::fmt;

/// Where a battle stands between player inputs.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattlePhase {
    AwaitingMoveSelection,
    ResolvingPlayerMove,
    ResolvingOpponentMove,
    CheckingOutcome,
    BattleContinues,
    PlayerFainted,
    OpponentFainted,
    Fled,
}

impl BattlePhase {
    /// No further input is accepted once one of these is reached.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BattlePhase::PlayerFainted | BattlePhase::OpponentFainted | BattlePhase::Fled
        )
    }
}

impl fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFailureReason {
    /// Every move slot is empty.
    NoMovesAvailable,
}

/// What a call into the battle session amounted to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The input was ignored (empty move slot).
    NoAction,
    BattleContinues,
    OpponentFainted,
    PlayerFainted,
    Fled,
}

impl TurnOutcome {
    pub fn is_battle_over(&self) -> bool {
        matches!(
            self,
            TurnOutcome::OpponentFainted | TurnOutcome::PlayerFainted | TurnOutcome::Fled
        )
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn Management
    TurnStarted {
        turn_number: u32,
    },
    PhaseChanged {
        from: BattlePhase,
        to: BattlePhase,
    },
    TurnEnded,

    // Actions
    MoveUsed {
        side: Side,
        pokemon: String,
        move_name: String,
    },
    ActionFailed {
        side: Side,
        pokemon: String,
        reason: ActionFailureReason,
    },
    AttackTypeEffectiveness {
        result: EffectivenessResult,
    },
    DamageDealt {
        side: Side,
        target: String,
        damage: u32,
        remaining_hp: u16,
    },
    PokemonFainted {
        side: Side,
        pokemon: String,
    },

    // Progression
    ExperienceGained {
        pokemon: String,
        amount: u32,
    },
    LevelUp {
        pokemon: String,
        old_level: u8,
        new_level: u8,
    },

    // Battle End
    PlayerFled {
        pokemon: String,
    },
    BattleEnded {
        outcome: TurnOutcome,
    },
}

impl BattleEvent {
    /// Human-readable text for the event.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::PhaseChanged { .. } | BattleEvent::TurnEnded => None,

            BattleEvent::MoveUsed {
                side,
                pokemon,
                move_name,
            } => Some(format!(
                "{} used {}!",
                Self::format_pokemon_name(*side, pokemon),
                move_name
            )),
            BattleEvent::ActionFailed {
                side,
                pokemon,
                reason,
            } => Some(format!(
                "{} {}",
                Self::format_pokemon_name(*side, pokemon),
                Self::format_action_failure_reason(reason)
            )),
            BattleEvent::AttackTypeEffectiveness { result } => {
                result.message.map(str::to_string)
            }
            BattleEvent::DamageDealt {
                side,
                target,
                damage,
                ..
            } => Some(format!(
                "{} took {} damage!",
                Self::format_pokemon_name(*side, target),
                damage
            )),
            BattleEvent::PokemonFainted { side, pokemon } => Some(format!(
                "{} fainted!",
                Self::format_pokemon_name(*side, pokemon)
            )),

            BattleEvent::ExperienceGained { pokemon, amount } => {
                Some(format!("{} gained {} EXP. Points!", pokemon, amount))
            }
            BattleEvent::LevelUp {
                pokemon, new_level, ..
            } => Some(format!("{} grew to level {}!", pokemon, new_level)),

            BattleEvent::PlayerFled { .. } => Some("Got away safely!".to_string()),
            BattleEvent::BattleEnded { outcome } => match outcome {
                TurnOutcome::OpponentFainted => Some("You won the battle!".to_string()),
                TurnOutcome::PlayerFainted => Some("You have no more Pokemon that can fight!".to_string()),
                _ => None,
            },
        }
    }

    fn format_pokemon_name(side: Side, pokemon: &str) -> String {
        match side {
            Side::Player => pokemon.to_string(),
            Side::Opponent => format!("The wild {}", pokemon),
        }
    }

    fn format_action_failure_reason(reason: &ActionFailureReason) -> &'static str {
        match reason {
            ActionFailureReason::NoMovesAvailable => "has no moves left!",
        }
    }
}

/// Ordered record of everything that happened during one call into a battle.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Text of every non-silent event, in order.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    /// Debug format of all events, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Result of one `select_move` or `run` call.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub phase: BattlePhase,
    pub events: EventBus,
    /// Set when the opponent fainted and the player was rewarded.
    pub experience: Option<ExperienceAward>,
}

impl TurnReport {
    pub(crate) fn no_action(phase: BattlePhase) -> Self {
        Self {
            outcome: TurnOutcome::NoAction,
            phase,
            events: EventBus::new(),
            experience: None,
        }
    }
}
