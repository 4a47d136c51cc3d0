use clap::Parser;
use hitstand_sim::prelude::*;
use std::path::PathBuf;

/// Simulate rounds between a dealer and a table of hit/stand players and report win and draw rates.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of rounds to simulate
    #[arg(short, long, default_value_t = 1000)]
    rounds: u32,

    /// Name of a player at the table, repeat for more players
    #[arg(short, long = "player", default_values_t = vec!["Monty".to_string()])]
    players: Vec<String>,

    /// Players hit while their best total is at or below this value
    #[arg(long, default_value_t = DealerStrategy::DEFAULT_MAX_HIT_VALUE)]
    player_max_hit: u32,

    /// The dealer hits while their best total is at or below this value
    #[arg(long, default_value_t = DealerStrategy::DEFAULT_MAX_HIT_VALUE)]
    dealer_max_hit: u32,

    /// Number of decks shuffled into one shoe
    #[arg(short, long)]
    decks: Option<usize>,

    /// Build a fresh shoe once fewer than this many cards remain
    #[arg(long)]
    reshuffle_threshold: Option<usize>,

    /// Keep the first shoe until it runs out
    #[arg(long)]
    no_auto_reshuffle: bool,

    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with game settings, flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, SimulationError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(decks) = self.decks {
            config.deck_count = decks;
        }
        if let Some(threshold) = self.reshuffle_threshold {
            config.reshuffle_threshold = threshold;
        }
        if self.no_auto_reshuffle {
            config.auto_reshuffle = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn table(&self) -> Result<Table, SimulationError> {
        let dealer = Participant::new("~Dealer~", DealerStrategy::new(self.dealer_max_hit));
        let players = self
            .players
            .iter()
            .map(|name| Participant::new(name.as_str(), DealerStrategy::new(self.player_max_hit)))
            .collect();
        Ok(Table::new(dealer, players)?)
    }
}

fn run(cli: &Cli) -> Result<(), SimulationError> {
    let config = cli.game_config()?;
    log::info!(
        "simulating {} rounds with {} decks, reshuffling below {} cards",
        cli.rounds,
        config.deck_count,
        config.reshuffle_threshold
    );
    let mut game = Game::new(cli.table()?, config)?;
    game.simulate_rounds(cli.rounds)?;

    let summary = game.summary()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
