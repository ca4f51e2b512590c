//! One battle session at a time behind text-returning commands. The stdio
//! server exposes each method here as a tool.

use crate::battle::ai::ScoringAI;
use crate::battle::state::{EventBus, TurnReport};
use crate::battle::turn_orchestrator::BattleSession;
use crate::battle_interface::*;
use crate::game_data::GameData;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub const NO_BATTLE: &str = "No battle is currently active. Use 'start_battle' to begin.";
pub const EMPTY_SLOT: &str = "That move slot is empty.";
pub const DEFAULT_SPECIES: &str = "Charmander";
pub const DEFAULT_LEVEL: u8 = 5;

#[derive(Debug)]
pub struct BattleService {
    data: GameData,
    session: Option<BattleSession>,
    last_events: EventBus,
    rng: StdRng,
}

impl BattleService {
    pub fn new(data: GameData) -> Self {
        Self {
            data,
            session: None,
            last_events: EventBus::new(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    /// Replace any running battle with a new wild encounter. A `seed` makes
    /// the opponent and its moves reproducible.
    pub fn start_battle(
        &mut self,
        species: Option<&str>,
        level: Option<u8>,
        seed: Option<u64>,
    ) -> Result<String, String> {
        let species = species.unwrap_or(DEFAULT_SPECIES);
        let level = level.unwrap_or(DEFAULT_LEVEL);
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        debug!(species, level, ?seed, "starting battle");

        let (session, intro_text) = create_wild_battle(
            &self.data,
            species,
            level,
            Box::new(ScoringAI::new()),
            &mut self.rng,
        )?;
        let text = format!(
            "{}\n\n{}\n\n{}",
            intro_text,
            display_battle_menu(),
            display_move_menu(session.player())
        );
        self.session = Some(session);
        self.last_events = EventBus::new();
        Ok(text)
    }

    pub fn battle_state(&self) -> String {
        match &self.session {
            Some(session) => format!(
                "{}\n\n{}",
                get_battle_status_summary(session),
                display_move_menu(session.player())
            ),
            None => NO_BATTLE.to_string(),
        }
    }

    pub fn use_move(&mut self, choice: &str) -> String {
        let Some(session) = self.session.as_mut() else {
            return NO_BATTLE.to_string();
        };
        match select_move_by_choice(session, choice) {
            Ok(report) => self.record(report).unwrap_or_else(|| EMPTY_SLOT.to_string()),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub fn status(&self) -> String {
        match &self.session {
            Some(session) => handle_status_command(session),
            None => NO_BATTLE.to_string(),
        }
    }

    pub fn run(&mut self) -> String {
        let Some(session) = self.session.as_mut() else {
            return NO_BATTLE.to_string();
        };
        match session.run() {
            Ok(report) => self.record(report).unwrap_or_default(),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Events of the last move or run as JSON, silent ones included.
    pub fn last_turn_events(&self) -> String {
        if self.session.is_none() {
            return NO_BATTLE.to_string();
        }
        serde_json::to_string_pretty(&self.last_events)
            .unwrap_or_else(|e| format!("Error: {}", e))
    }

    /// Keep the report's events and return its text, or `None` if nothing
    /// happened.
    fn record(&mut self, report: TurnReport) -> Option<String> {
        let text = format_report(&report);
        self.last_events = report.events;
        (!text.is_empty()).then_some(text)
    }

    pub fn lookup_move(&self, move_name: &str) -> String {
        handle_lookup_move_command(&self.data, move_name)
    }
}
