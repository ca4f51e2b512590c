use crate::battle::ai::Behavior;
use crate::battle::calculators::{DamageCalculator, DamageResult};
use crate::battle::state::{
    ActionFailureReason, BattleEvent, BattlePhase, EventBus, Side, TurnOutcome, TurnReport,
};
use crate::errors::BattleStateError;
use crate::moves::Move;
use crate::pokemon::{Combatant, PokemonInst};
use crate::progression::{ExperienceAward, ExperienceModel, ExperienceReward, RewardCalculator};
use tracing::{debug, info};

/// One battle between the player's Pokemon and an opponent.
///
/// Each call to [`BattleSession::select_move`] runs a whole turn: the player
/// always acts first, then the opponent if it is still standing. The session
/// owns both combatants until [`BattleSession::into_player`] hands the
/// player's Pokemon back.
#[derive(Debug)]
pub struct BattleSession {
    player: PokemonInst,
    opponent: PokemonInst,
    phase: BattlePhase,
    turn_number: u32,
    calculator: DamageCalculator,
    experience: ExperienceModel,
    rewards: Box<dyn ExperienceReward>,
    behavior: Box<dyn Behavior>,
}

impl BattleSession {
    pub fn new(
        player: PokemonInst,
        opponent: PokemonInst,
        calculator: DamageCalculator,
        behavior: Box<dyn Behavior>,
    ) -> Self {
        debug!(player = %player, opponent = %opponent, "battle started");
        Self {
            player,
            opponent,
            phase: BattlePhase::AwaitingMoveSelection,
            turn_number: 1,
            calculator,
            experience: ExperienceModel::default(),
            rewards: Box::new(RewardCalculator::default()),
            behavior,
        }
    }

    pub fn with_experience_model(mut self, experience: ExperienceModel) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_rewards(mut self, rewards: Box<dyn ExperienceReward>) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn player(&self) -> &PokemonInst {
        &self.player
    }

    pub fn opponent(&self) -> &PokemonInst {
        &self.opponent
    }

    pub fn calculator(&self) -> &DamageCalculator {
        &self.calculator
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Ends the battle and returns the player's Pokemon with its HP, level and
    /// experience as the battle left them.
    pub fn into_player(self) -> PokemonInst {
        self.player
    }

    /// Use the move in `slot` and let the opponent answer.
    ///
    /// An empty or out-of-range slot does nothing and reports
    /// [`TurnOutcome::NoAction`].
    pub fn select_move(&mut self, slot: usize) -> Result<TurnReport, BattleStateError> {
        self.expect_move_selection()?;

        let Some(player_move) = self.player.move_at(slot).cloned() else {
            debug!(slot, "empty move slot selected");
            return Ok(TurnReport::no_action(self.phase));
        };

        let mut bus = EventBus::new();
        bus.push(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });

        // Player
        self.transition(&mut bus, BattlePhase::ResolvingPlayerMove);
        self.execute_move(Side::Player, &player_move, &mut bus);

        if self.opponent.is_fainted() {
            bus.push(BattleEvent::PokemonFainted {
                side: Side::Opponent,
                pokemon: self.opponent.name.clone(),
            });
            self.transition(&mut bus, BattlePhase::OpponentFainted);
            let award = self.reward_player(&mut bus);
            return Ok(self.finish(bus, TurnOutcome::OpponentFainted, Some(award)));
        }

        // Opponent
        self.transition(&mut bus, BattlePhase::ResolvingOpponentMove);
        let opponent_move = self
            .behavior
            .choose_move(&self.opponent, &self.player, &self.calculator)
            .and_then(|slot| self.opponent.move_at(slot).cloned());
        match opponent_move {
            Some(move_) => {
                self.execute_move(Side::Opponent, &move_, &mut bus);
            }
            None => bus.push(BattleEvent::ActionFailed {
                side: Side::Opponent,
                pokemon: self.opponent.name.clone(),
                reason: ActionFailureReason::NoMovesAvailable,
            }),
        }

        if self.player.is_fainted() {
            bus.push(BattleEvent::PokemonFainted {
                side: Side::Player,
                pokemon: self.player.name.clone(),
            });
            self.transition(&mut bus, BattlePhase::PlayerFainted);
            return Ok(self.finish(bus, TurnOutcome::PlayerFainted, None));
        }

        self.transition(&mut bus, BattlePhase::CheckingOutcome);
        self.transition(&mut bus, BattlePhase::BattleContinues);
        bus.push(BattleEvent::TurnEnded);
        self.turn_number += 1;
        self.transition(&mut bus, BattlePhase::AwaitingMoveSelection);

        Ok(TurnReport {
            outcome: TurnOutcome::BattleContinues,
            phase: self.phase,
            events: bus,
            experience: None,
        })
    }

    /// Leave the battle. Only possible while a move is being chosen.
    pub fn run(&mut self) -> Result<TurnReport, BattleStateError> {
        if self.phase != BattlePhase::AwaitingMoveSelection {
            return Err(BattleStateError::CannotFlee(self.phase));
        }

        let mut bus = EventBus::new();
        bus.push(BattleEvent::PlayerFled {
            pokemon: self.player.name.clone(),
        });
        self.transition(&mut bus, BattlePhase::Fled);
        Ok(self.finish(bus, TurnOutcome::Fled, None))
    }

    fn expect_move_selection(&self) -> Result<(), BattleStateError> {
        if self.phase.is_terminal() {
            return Err(BattleStateError::BattleOver(self.phase));
        }
        if self.phase != BattlePhase::AwaitingMoveSelection {
            return Err(BattleStateError::InvalidPhase {
                expected: BattlePhase::AwaitingMoveSelection,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn transition(&mut self, bus: &mut EventBus, to: BattlePhase) {
        debug!(from = ?self.phase, to = ?to, "phase change");
        bus.push(BattleEvent::PhaseChanged {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    fn execute_move(&mut self, side: Side, move_: &Move, bus: &mut EventBus) -> DamageResult {
        let (attacker, defender) = match side {
            Side::Player => (&self.player, &mut self.opponent),
            Side::Opponent => (&self.opponent, &mut self.player),
        };

        bus.push(BattleEvent::MoveUsed {
            side,
            pokemon: attacker.name.clone(),
            move_name: move_.name().to_string(),
        });

        let result = move_.resolve(&self.calculator, attacker, defender);
        debug!(
            attacker = %attacker.name,
            defender = %defender.name,
            move_name = move_.name(),
            damage = result.final_damage,
            multiplier = result.effectiveness.multiplier,
            "move resolved"
        );

        bus.push(BattleEvent::DamageDealt {
            side: side.opposite(),
            target: defender.name.clone(),
            damage: result.final_damage,
            remaining_hp: defender.current_hp(),
        });
        bus.push(BattleEvent::AttackTypeEffectiveness {
            result: result.effectiveness,
        });
        result
    }

    fn reward_player(&mut self, bus: &mut EventBus) -> ExperienceAward {
        let amount = self.rewards.experience_for(&self.opponent);
        let growth = self.player.growth;
        let award = self
            .experience
            .award_experience(&mut self.player, amount, &growth);

        bus.push(BattleEvent::ExperienceGained {
            pokemon: self.player.name.clone(),
            amount,
        });
        if award.leveled_up {
            bus.push(BattleEvent::LevelUp {
                pokemon: self.player.name.clone(),
                old_level: award.previous_level,
                new_level: award.new_level,
            });
        }
        award
    }

    fn finish(
        &self,
        mut bus: EventBus,
        outcome: TurnOutcome,
        experience: Option<ExperienceAward>,
    ) -> TurnReport {
        info!(?outcome, turns = self.turn_number, "battle ended");
        bus.push(BattleEvent::BattleEnded { outcome });
        TurnReport {
            outcome,
            phase: self.phase,
            events: bus,
            experience,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_phase(&mut self, phase: BattlePhase) {
        self.phase = phase;
    }
}
