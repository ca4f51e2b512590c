//! Text front end for a battle session, shared by the demo binary and the
//! stdio server.
//!
//! Everything here renders to `String`; errors are user-facing messages.

use crate::battle::ai::Behavior;
use crate::battle::state::{BattlePhase, TurnReport};
use crate::battle::turn_orchestrator::BattleSession;
use crate::game_data::GameData;
use crate::pokemon::{Combatant, HealthBand, PokemonInst, MOVE_SLOTS};
use rand::Rng;

/// Entries of the top-level battle menu, in display order.
pub const BATTLE_MENU: [&str; 3] = ["Fight", "Status", "Run"];

/// Shown when "Status" is picked from the battle menu.
pub const STATUS_MESSAGE: &str = "You're doing great!";

const HEALTH_BAR_WIDTH: usize = 20;

/// Starts a battle against a randomly generated wild opponent and returns the
/// session with its intro text.
pub fn create_wild_battle<R: Rng>(
    data: &GameData,
    player_species: &str,
    level: u8,
    behavior: Box<dyn Behavior>,
    rng: &mut R,
) -> Result<(BattleSession, String), String> {
    let player = data
        .create_pokemon(player_species, level)
        .map_err(|e| format!("Failed to create your Pokemon: {}", e))?;
    let opponent = data
        .generate_wild_opponent(rng)
        .map_err(|e| format!("Failed to create the wild Pokemon: {}", e))?;

    let intro_text = format!(
        "A wild {} appeared!\nGo! {}!",
        opponent.name.to_uppercase(),
        player.name.to_uppercase()
    );
    Ok((data.start_battle(player, opponent, behavior), intro_text))
}

/// `[##########----------]` style bar with a colour band label.
pub fn health_bar(pokemon: &PokemonInst) -> String {
    let max = pokemon.max_hp().max(1) as usize;
    let filled = (pokemon.current_hp() as usize * HEALTH_BAR_WIDTH).div_ceil(max);
    let band = match pokemon.health_band() {
        HealthBand::Healthy => "green",
        HealthBand::Wounded => "yellow",
        HealthBand::Critical => "red",
    };
    format!(
        "[{}{}] {} ({})",
        "#".repeat(filled),
        "-".repeat(HEALTH_BAR_WIDTH - filled),
        pokemon.health_meter(),
        band
    )
}

/// Both combatants, opponent first as on screen.
pub fn display_battle_status(session: &BattleSession) -> String {
    let opponent = session.opponent();
    let player = session.player();
    format!(
        "{} Lv{}\n  HP {}\n{} Lv{}\n  HP {}\n  EXP {}",
        opponent.name.to_uppercase(),
        opponent.level(),
        health_bar(opponent),
        player.name.to_uppercase(),
        player.level(),
        health_bar(player),
        player.experience_meter()
    )
}

/// Displays the full details of the player's Pokemon
pub fn display_self_status(session: &BattleSession) -> String {
    format!("--- Your Pokemon ---\n{:#}", session.player())
}

/// The "Status" entry of the battle menu: encouragement plus the player's
/// Pokemon in detail. Takes no turn.
pub fn handle_status_command(session: &BattleSession) -> String {
    format!("{}\n\n{}", STATUS_MESSAGE, display_self_status(session))
}

pub fn display_battle_menu() -> String {
    BATTLE_MENU
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The four move slots; an empty slot shows as "-".
pub fn display_move_menu(pokemon: &PokemonInst) -> String {
    (0..MOVE_SLOTS)
        .map(|slot| match pokemon.move_at(slot) {
            Some(move_) => format!("{}. {}", slot + 1, move_),
            None => format!("{}. -", slot + 1),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handles the "lookup move" command for move details
pub fn handle_lookup_move_command(data: &GameData, move_name: &str) -> String {
    if move_name.trim().is_empty() {
        return "What move do you want to look up? (e.g., 'tackle')".to_string();
    }

    match data.moves.create_instance(move_name.trim()) {
        Ok(move_) => format!("--- Move Details ---\n{}", move_),
        Err(e) => e.to_string(),
    }
}

/// Uses a move named by number (`1`-`4`) or by name.
pub fn select_move_by_choice(
    session: &mut BattleSession,
    choice: &str,
) -> Result<TurnReport, String> {
    let choice = choice.trim();
    let slot = match choice.parse::<usize>() {
        Ok(number) if (1..=MOVE_SLOTS).contains(&number) => number - 1,
        Ok(_) => return Err(format!("Invalid move number. Use 1-{}.", MOVE_SLOTS)),
        Err(_) => find_move_slot(session.player(), choice).ok_or_else(|| {
            format!("'{}' is not a valid move for your Pokemon.", choice)
        })?,
    };
    session.select_move(slot).map_err(|e| e.to_string())
}

/// Formatted events of a turn, one per line.
pub fn format_report(report: &TurnReport) -> String {
    let mut output = String::new();
    for line in report.events.formatted() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Gets the current battle status as a formatted string
pub fn get_battle_status_summary(session: &BattleSession) -> String {
    let header = match session.phase() {
        BattlePhase::OpponentFainted => "Battle Over - You Won!",
        BattlePhase::PlayerFainted => "Battle Over - You Lost!",
        BattlePhase::Fled => "Battle Over - You Ran Away",
        _ => "Battle in Progress",
    };
    format!("{}\n{}", header, display_battle_status(session))
}

fn find_move_slot(pokemon: &PokemonInst, name: &str) -> Option<usize> {
    (0..MOVE_SLOTS).find(|&slot| {
        pokemon
            .move_at(slot)
            .is_some_and(|m| m.name().eq_ignore_ascii_case(name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::ai::ScoringAI;
    use crate::battle::state::TurnOutcome;
    use crate::battle::tests::common::{create_test_session, test_move, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use schema::PokemonType;

    fn session() -> BattleSession {
        let player = TestPokemonBuilder::new(PokemonType::Water, 10)
            .with_name("Squirtle")
            .with_stats(40, 20, 15)
            .with_moves(vec![
                test_move("Tackle", PokemonType::Normal, 40),
                test_move("Water Gun", PokemonType::Water, 40),
            ])
            .build();
        let opponent = TestPokemonBuilder::new(PokemonType::Fire, 10)
            .with_name("Charmander")
            .with_stats(40, 20, 15)
            .with_moves(vec![test_move("Ember", PokemonType::Fire, 40)])
            .build();
        create_test_session(player, opponent)
    }

    #[test]
    fn test_move_menu_shows_empty_slots() {
        let session = session();
        assert_eq!(
            display_move_menu(session.player()),
            "1. Tackle [Normal] Power: 40\n2. Water Gun [Water] Power: 40\n3. -\n4. -"
        );
        assert_eq!(display_battle_menu(), "1. Fight\n2. Status\n3. Run");
    }

    #[test]
    fn test_health_bar_bands() {
        let mut pokemon = TestPokemonBuilder::new(PokemonType::Normal, 5)
            .with_stats(40, 10, 10)
            .build();
        assert_eq!(health_bar(&pokemon), "[####################] 40/40 (green)");
        pokemon.set_current_hp(10);
        assert_eq!(health_bar(&pokemon), "[#####---------------] 10/40 (red)");
        pokemon.set_current_hp(0);
        assert_eq!(health_bar(&pokemon), "[--------------------] 0/40 (red)");
    }

    #[test]
    fn test_select_move_by_name_and_number() {
        let mut session = session();
        let output = format_report(&select_move_by_choice(&mut session, "water gun").unwrap());
        assert!(output.contains("Squirtle used Water Gun!"));
        assert!(output.contains("It's super effective!"));

        let output = format_report(&select_move_by_choice(&mut session, "1").unwrap());
        assert!(output.contains("Squirtle used Tackle!"));

        // Empty slot: nothing happens
        let report = select_move_by_choice(&mut session, "3").unwrap();
        assert_eq!(report.outcome, TurnOutcome::NoAction);
        assert_eq!(format_report(&report), "");
        assert!(select_move_by_choice(&mut session, "9").is_err());
        assert!(select_move_by_choice(&mut session, "Hydro Pump").is_err());
    }

    #[test]
    fn test_run_then_status() {
        let mut session = session();
        let report = session.run().unwrap();
        assert_eq!(format_report(&report), "Got away safely!\n");
        assert!(get_battle_status_summary(&session).starts_with("Battle Over - You Ran Away"));
        assert!(session.run().is_err());
    }

    #[test]
    fn test_status_takes_no_turn() {
        let session = session();
        let output = handle_status_command(&session);
        assert!(output.starts_with("You're doing great!\n\n--- Your Pokemon ---\n"));
        assert!(output.contains(&format!("{:#}", session.player())));
        assert_eq!(session.turn_number(), 1);
        assert_eq!(session.phase(), BattlePhase::AwaitingMoveSelection);
    }

    #[test]
    fn test_lookup_move() {
        let data = GameData::builtin().unwrap();
        assert_eq!(
            handle_lookup_move_command(&data, "flame-wheel"),
            "--- Move Details ---\nFlame Wheel [Fire] Power: 60"
        );
        assert_eq!(
            handle_lookup_move_command(&data, "Hyper Beam"),
            "Move \"Hyper Beam\" not found in move definitions"
        );
    }

    #[test]
    fn test_wild_battle_intro() {
        let data = GameData::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let (session, intro) =
            create_wild_battle(&data, "Bulbasaur", 5, Box::new(ScoringAI::new()), &mut rng).unwrap();
        assert!(intro.starts_with(&format!(
            "A wild {} appeared!",
            session.opponent().name.to_uppercase()
        )));
        assert!(intro.ends_with("Go! BULBASAUR!"));
        assert!(create_wild_battle(&data, "Mew", 5, Box::new(ScoringAI::new()), &mut rng).is_err());
    }
}
