//! Module that drives many rounds at one table, owns the shoe and keeps the outcome log.

use crate::config::GameConfig;
use crate::round::{Outcome, Round};
use crate::summary::{PlayerRates, PlayerSummary, SimulationSummary};
use crate::table::Table;
use hitstand_lib::{BlackjackGameError, Deck, CARDS_PER_DECK};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// Struct that provides the functionality to simulate repeated rounds at a single `Table`.
/// Every completed round's `Outcome` is recorded so rates can be reported afterwards.
pub struct Game {
    table: Table,
    config: GameConfig,
    deck: Option<Deck>,
    outcomes: Vec<Outcome>,
    num_rounds: u32,
    rng: StdRng,
}

impl Game {
    /// Associated method for building a new game. The shoe is not built until it is first needed.
    pub fn new(table: Table, config: GameConfig) -> Result<Game, BlackjackGameError> {
        if config.deck_count == 0 {
            return Err(BlackjackGameError::InvalidConfig(
                "deck_count must be at least 1".to_string(),
            ));
        }
        if CARDS_PER_DECK.checked_mul(config.deck_count).is_none() {
            return Err(BlackjackGameError::InvalidConfig(format!(
                "a shoe of {} decks is too large",
                config.deck_count
            )));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Game {
            table,
            config,
            deck: None,
            outcomes: Vec::new(),
            num_rounds: 0,
            rng,
        })
    }

    /// Getter method for the table being simulated.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Getter method for the game's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Getter method for the outcome of every completed round, oldest first.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Getter method for the number of rounds simulated so far.
    pub fn num_rounds(&self) -> u32 {
        self.num_rounds
    }

    /// Cards left in the current shoe, without triggering a reshuffle.
    pub fn remaining_cards(&self) -> Option<usize> {
        self.deck.as_ref().map(Deck::len)
    }

    /// Returns the shoe the next round would be dealt from, replacing it first if it is missing
    /// or has dropped below the reshuffle threshold.
    pub fn deck(&mut self) -> &Deck {
        Self::current_deck(&mut self.deck, &self.config, &mut self.rng)
    }

    fn current_deck<'d>(
        slot: &'d mut Option<Deck>,
        config: &GameConfig,
        rng: &mut StdRng,
    ) -> &'d mut Deck {
        let worn_out = slot
            .as_ref()
            .map_or(false, |deck| config.auto_reshuffle && deck.len() < config.reshuffle_threshold);
        if worn_out {
            *slot = None;
        }
        slot.get_or_insert_with(|| {
            let mut deck = Deck::with_decks(config.deck_count);
            deck.shuffle(rng);
            debug!("shuffled a fresh shoe of {} cards", deck.len());
            deck
        })
    }

    /// Plays `n` complete rounds, recording the outcome of each one.
    /// An error ends the batch, the failed round is not recorded.
    pub fn simulate_rounds(&mut self, n: u32) -> Result<(), BlackjackGameError> {
        for round_num in 0..n {
            trace!("on round {} / {}", round_num + 1, n);
            let deck = Self::current_deck(&mut self.deck, &self.config, &mut self.rng);
            let mut round = Round::new(&mut self.table, deck);
            round.deal_start()?;
            while !round.round_complete() {
                round.next_turn()?;
            }
            let outcome = round.outcome()?;
            self.outcomes.push(outcome);
            self.num_rounds += 1;
        }
        info!("simulated {} rounds, {} in total", n, self.num_rounds);
        Ok(())
    }

    /// Win and draw rates for every player, keyed by name.
    pub fn summary_data(&self) -> Result<BTreeMap<String, PlayerRates>, BlackjackGameError> {
        Ok(self
            .summary()?
            .players
            .into_iter()
            .map(|player| (player.name, player.rates))
            .collect())
    }

    /// Method to get a `SimulationSummary` derived from the outcomes recorded so far.
    pub fn summary(&self) -> Result<SimulationSummary, BlackjackGameError> {
        if self.num_rounds == 0 {
            return Err(BlackjackGameError::EmptySimulation);
        }
        let total = self.num_rounds as f64;
        let players = self
            .table
            .players()
            .iter()
            .map(|player| {
                let name = player.name();
                let wins = self.outcomes.iter().filter(|o| o.is_winner(name)).count();
                let draws = self.outcomes.iter().filter(|o| o.is_draw(name)).count();
                PlayerSummary {
                    name: name.to_string(),
                    strategy: player.strategy().label(),
                    rates: PlayerRates {
                        win_rate: wins as f64 / total,
                        draw_rate: draws as f64 / total,
                    },
                }
            })
            .collect();
        Ok(SimulationSummary {
            num_rounds: self.num_rounds,
            players,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::Participant;
    use crate::strategy::DealerStrategy;

    fn table() -> Table {
        Table::new(
            Participant::new("~Dealer~", DealerStrategy::default()),
            vec![
                Participant::new("Monty", DealerStrategy::default()),
                Participant::new("Cautious", DealerStrategy::new(12)),
            ],
        )
        .unwrap()
    }

    fn seeded(config: &mut crate::config::GameConfigBuilder) -> Game {
        Game::new(table(), config.seed(2024).build()).unwrap()
    }

    #[test]
    fn summary_needs_at_least_one_round() {
        let game = seeded(&mut GameConfig::new());
        assert!(matches!(game.summary_data(), Err(BlackjackGameError::EmptySimulation)));
        assert!(matches!(game.summary(), Err(BlackjackGameError::EmptySimulation)));
    }

    #[test]
    fn zero_decks_is_rejected() {
        let result = Game::new(table(), GameConfig::new().deck_count(0).build());
        assert!(matches!(result, Err(BlackjackGameError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_shoe_is_rejected() {
        let result = Game::new(table(), GameConfig::new().deck_count(usize::MAX).build());
        assert!(matches!(result, Err(BlackjackGameError::InvalidConfig(_))));
    }

    #[test]
    fn shoe_is_built_on_first_read() {
        let mut game = seeded(&mut GameConfig::new());
        assert_eq!(game.remaining_cards(), None);
        assert_eq!(game.deck().len(), 312);
        assert_eq!(game.remaining_cards(), Some(312));
        // a full shoe is above the threshold, so a second read keeps it
        let first: Vec<usize> = game.deck().iter().map(|c| c.id()).collect();
        let second: Vec<usize> = game.deck().iter().map(|c| c.id()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn thousand_rounds_give_sane_rates() {
        let mut game = seeded(&mut GameConfig::new());
        game.simulate_rounds(1000).unwrap();
        assert_eq!(game.num_rounds(), 1000);
        assert_eq!(game.outcomes().len(), 1000);

        let data = game.summary_data().unwrap();
        assert_eq!(data.len(), 2);
        for rates in data.values() {
            assert!((0.0..=1.0).contains(&rates.win_rate));
            assert!((0.0..=1.0).contains(&rates.draw_rate));
            assert!(rates.win_rate + rates.draw_rate <= 1.0);
        }
    }

    #[test]
    fn outcomes_partition_the_players() {
        let mut game = seeded(&mut GameConfig::new());
        game.simulate_rounds(200).unwrap();
        for outcome in game.outcomes() {
            for name in ["Monty", "Cautious"] {
                let hits = [
                    outcome.is_winner(name),
                    outcome.is_draw(name),
                    outcome.is_loser(name),
                ];
                assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
            }
            assert!(!outcome.is_loser("~Dealer~") && !outcome.is_winner("~Dealer~"));
        }
    }

    #[test]
    fn worn_shoe_is_replaced_whole() {
        let mut game = seeded(GameConfig::new().deck_count(1).reshuffle_threshold(25));
        let mut replaced = 0;
        for _ in 0..100 {
            game.simulate_rounds(1).unwrap();
            let before = game.remaining_cards().unwrap();
            let after = game.deck().len();
            if before < 25 {
                assert_eq!(after, 52);
                replaced += 1;
            } else {
                assert_eq!(after, before);
            }
        }
        assert!(replaced > 0);
    }

    #[test]
    fn without_auto_reshuffle_the_shoe_runs_out() {
        let mut game = seeded(GameConfig::new().deck_count(1).auto_reshuffle(false));
        assert_eq!(game.simulate_rounds(100), Err(BlackjackGameError::DeckExhausted));
        assert!(game.num_rounds() < 100);
        assert_eq!(game.outcomes().len() as u32, game.num_rounds());
    }

    #[test]
    fn zero_threshold_exhausts_the_shoe() {
        let mut game = seeded(GameConfig::new().deck_count(1).reshuffle_threshold(0));
        assert_eq!(game.simulate_rounds(100), Err(BlackjackGameError::DeckExhausted));
    }

    #[test]
    fn same_seed_same_results() {
        let mut first = seeded(&mut GameConfig::new());
        let mut second = seeded(&mut GameConfig::new());
        first.simulate_rounds(50).unwrap();
        second.simulate_rounds(50).unwrap();
        assert_eq!(first.outcomes(), second.outcomes());
    }
}
