//! Scripted demo: walk through tall grass until a wild Pokemon appears, then
//! battle it with the strongest available move each turn.
//!
//! Usage: `pocket-battle [DATA_DIR]`. Without a directory the built-in data is
//! used. Set `RUST_LOG=debug` to see phase transitions.

use pocket_battle::battle::ai::{Behavior, RandomAI, ScoringAI};
use pocket_battle::battle_interface::{
    display_battle_menu, display_battle_status, display_move_menu, format_report,
    handle_status_command,
};
use pocket_battle::errors::BattleResult;
use pocket_battle::game_data::GameData;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const PLAYER_SPECIES: &str = "Charmander";
const PLAYER_LEVEL: u8 = 7;
const MAX_STEPS: u32 = 200;
const MAX_TURNS: u32 = 50;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run_demo(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "demo battle failed");
            ExitCode::FAILURE
        }
    }
}

fn run_demo(data_dir: Option<String>) -> BattleResult<()> {
    let data = match data_dir {
        Some(dir) => GameData::load(Path::new(&dir))?,
        None => GameData::builtin()?,
    };
    let mut rng = rand::rng();

    let player = data.create_pokemon(PLAYER_SPECIES, PLAYER_LEVEL)?;
    println!("{:#}\n", player);

    let mut steps = 1;
    while !data.encounters.check_for_encounter(true, &mut rng) {
        if steps >= MAX_STEPS {
            println!("Walked {} steps through the grass and met nobody.", steps);
            return Ok(());
        }
        steps += 1;
    }
    info!(steps, "encounter triggered");

    let opponent = data.generate_wild_opponent(&mut rng)?;
    println!("A wild {} appeared!", opponent.name.to_uppercase());
    println!("Go! {}!\n", player.name.to_uppercase());

    let mut session = data.start_battle(player, opponent, Box::new(RandomAI::new()));
    let mut strategy = ScoringAI::new();

    println!("{}\n", display_battle_menu());
    println!("{}\n", handle_status_command(&session));
    println!("{}\n", display_move_menu(session.player()));
    for _ in 0..MAX_TURNS {
        if session.is_over() {
            break;
        }
        let Some(slot) =
            strategy.choose_move(session.player(), session.opponent(), session.calculator())
        else {
            println!("{} has no moves!", session.player().name);
            session.run()?;
            break;
        };

        let report = session.select_move(slot)?;
        print!("{}", format_report(&report));
        println!("\n{}\n", display_battle_status(&session));
    }

    let player = session.into_player();
    println!("{:#}", player);
    Ok(())
}
