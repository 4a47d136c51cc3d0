use serde::Serialize;
use std::fmt::Display;

/// Fraction of simulated rounds a player won and drew, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerRates {
    pub win_rate: f64,
    pub draw_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    /// Label of the hit/stand policy the player followed.
    pub strategy: String,
    #[serde(flatten)]
    pub rates: PlayerRates,
}

/// Simple struct for reporting the results of a simulation, players listed in seat order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub num_rounds: u32,
    pub players: Vec<PlayerSummary>,
}

impl Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 80;
        writeln!(f, "{}", "-".repeat(WIDTH))?;
        writeln!(f, "Number of rounds simulated: {:>10}", self.num_rounds)?;
        for player in &self.players {
            writeln!(
                f,
                "{} ({}) | Win Rate: {:.4} | Draw Rate: {:.4}",
                player.name, player.strategy, player.rates.win_rate, player.rates.draw_rate
            )?;
        }
        write!(f, "{}", "-".repeat(WIDTH))
    }
}
