//! Terminal presenter for a single Starter Duel match.
use anyhow::{Context, Result};
use clap::Parser;
use starter_duel::{
    env_filter, load_roster, BattleInfo, CombatantInfo, MatchController, MatchState, RandomSource,
    TurnRng,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starter-duel", about = "Pick a starter and battle a random opponent")]
struct Cli {
    /// Roster file to load (.json or .ron)
    #[arg(long, env = "STARTER_DUEL_ROSTER", default_value = "data/pokemon_stats.json")]
    roster: PathBuf,

    /// Seed for a reproducible match
    #[arg(long, env = "STARTER_DUEL_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let roster = load_roster(&cli.roster)
        .with_context(|| format!("Failed to load roster from {}", cli.roster.display()))?;
    let rng = match cli.seed {
        Some(seed) => TurnRng::from_seed(seed),
        None => TurnRng::from_os_rng(),
    };
    let controller = MatchController::with_rng(roster.templates, rng)?;

    let stdin = io::stdin();
    Presenter::new(controller).run(stdin.lock().lines())
}

/// Drives the controller from line-based input and prints everything it
/// narrates.
struct Presenter<R> {
    controller: MatchController<R>,
    last_state: MatchState,
}

impl<R: RandomSource> Presenter<R> {
    fn new(controller: MatchController<R>) -> Self {
        let last_state = controller.state();
        Self {
            controller,
            last_state,
        }
    }

    fn run(mut self, mut lines: impl Iterator<Item = io::Result<String>>) -> Result<()> {
        loop {
            match self.controller.state() {
                MatchState::Selection => self.prompt_starters()?,
                MatchState::Battle => self.prompt_moves()?,
                MatchState::Over => return Ok(()),
            }

            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let line = line?;

            let limit = self.choice_count();
            let Some(choice) = parse_choice(&line, limit) else {
                println!("Please enter a number between 1 and {}.", limit);
                continue;
            };

            let result = match self.controller.state() {
                MatchState::Selection => self.controller.select_starter(choice),
                MatchState::Battle => self.controller.run_turn(choice).map(|_| ()),
                MatchState::Over => Ok(()),
            };
            if let Err(err) = result {
                println!("{}", err);
            }

            self.flush()?;
        }
    }

    fn choice_count(&self) -> usize {
        match self.controller.battle_info() {
            Some(info) if self.controller.state() == MatchState::Battle => info.player.moves.len(),
            _ => self.controller.starter_names().len(),
        }
    }

    /// Print state changes, queued narration and, mid-battle, the status block.
    fn flush(&mut self) -> Result<()> {
        let state = self.controller.state();
        if state != self.last_state {
            println!("STATE CHANGE: {} -> {}", self.last_state, state);
            self.last_state = state;
        }

        for message in self.controller.drain_messages() {
            println!(">> {}", message);
        }

        if let Some(info) = self.controller.battle_info() {
            print_status(&info);
        }
        io::stdout().flush()?;
        Ok(())
    }

    fn prompt_starters(&self) -> Result<()> {
        println!("Choose your starter:");
        for (i, name) in self.controller.starter_names().iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
        prompt()
    }

    fn prompt_moves(&self) -> Result<()> {
        if let Some(info) = self.controller.battle_info() {
            println!("What will {} do?", info.player.name);
            for (i, m) in info.player.moves.iter().enumerate() {
                let power = m.power.map_or_else(|| "-".to_string(), |p| p.to_string());
                println!("  {}. {} ({}, {}, {})", i + 1, m.name, m.move_type, m.category, power);
            }
        }
        prompt()
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Turn a 1-based menu entry into a 0-based index.
fn parse_choice(line: &str, limit: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=limit).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn print_status(info: &BattleInfo) {
    println!("--- Turn {} ---", info.turn_number);
    print_side("Opponent", &info.opponent);
    print_side("You", &info.player);
    println!();
}

fn print_side(label: &str, side: &CombatantInfo) {
    let types: Vec<String> = side.types.iter().map(ToString::to_string).collect();
    println!(
        "{:<9}{} Lv{} [{}]  HP {}/{}",
        format!("{}:", label),
        side.name,
        side.level,
        types.join("/"),
        side.current_health,
        side.max_health
    );
}

