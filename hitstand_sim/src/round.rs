use crate::participant::Participant;
use crate::table::Table;
use hitstand_lib::{BlackjackGameError, Deck, Hand};
use log::debug;
use std::collections::BTreeSet;
use std::fmt::Display;

/// The partition of players into winners, draws and losers for one completed round.
/// The dealer never appears in any of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub winners: BTreeSet<String>,
    pub draws: BTreeSet<String>,
    pub losers: BTreeSet<String>,
}

impl Outcome {
    /// Decides the outcome from the final hands at `table`.
    /// A busted dealer pays every player still standing. Otherwise players beat or tie the
    /// dealer's primary value, and everyone else, busted players included, loses.
    pub fn resolve(table: &Table) -> Outcome {
        let potential_winners: Vec<&Participant> = table
            .players()
            .iter()
            .filter(|player| !player.busted())
            .collect();

        let (winners, draws): (BTreeSet<String>, BTreeSet<String>) = if table.dealer().busted() {
            (
                potential_winners
                    .iter()
                    .map(|player| player.name().to_string())
                    .collect(),
                BTreeSet::new(),
            )
        } else {
            let dealer_value = table.dealer().primary_value();
            (
                potential_winners
                    .iter()
                    .filter(|player| player.primary_value() > dealer_value)
                    .map(|player| player.name().to_string())
                    .collect(),
                potential_winners
                    .iter()
                    .filter(|player| player.primary_value() == dealer_value)
                    .map(|player| player.name().to_string())
                    .collect(),
            )
        };

        let losers = table
            .players()
            .iter()
            .map(|player| player.name())
            .filter(|name| !winners.contains(*name) && !draws.contains(*name))
            .map(str::to_string)
            .collect();

        Outcome {
            winners,
            draws,
            losers,
        }
    }

    /// Returns true if `name` beat the dealer.
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.contains(name)
    }

    /// Returns true if `name` tied the dealer.
    pub fn is_draw(&self, name: &str) -> bool {
        self.draws.contains(name)
    }

    /// Returns true if `name` lost to the dealer.
    pub fn is_loser(&self, name: &str) -> bool {
        self.losers.contains(name)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |names: &BTreeSet<String>| {
            names
                .iter()
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(", ")
        };
        write!(
            f,
            "Winner(s): {} | Draws: {} | Losers: {}",
            join(&self.winners),
            join(&self.draws),
            join(&self.losers)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Dealing,
    TurnsPending,
    Complete,
}

/// One hand of play at `table`, dealt from `deck`. Drive it with `deal_start` and then
/// `next_turn` until `round_complete` returns true.
pub struct Round<'a> {
    table: &'a mut Table,
    deck: &'a mut Deck,
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Associated function to create a new `Round`, every participant starts with their turn pending.
    pub fn new(table: &'a mut Table, deck: &'a mut Deck) -> Round<'a> {
        for person in table.people_mut() {
            person.reset_turn();
        }
        Round {
            table,
            deck,
            state: RoundState::Dealing,
        }
    }

    /// Getter method for the round's current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns true once every turn is over and the outcome can be read.
    pub fn round_complete(&self) -> bool {
        self.state == RoundState::Complete
    }

    /// Getter method for the table this round is played at.
    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// Gives everyone a fresh hand, then deals one card to each person in turn order
    /// and a second card to each person in the same order.
    pub fn deal_start(&mut self) -> Result<(), BlackjackGameError> {
        if self.state != RoundState::Dealing {
            return Err(BlackjackGameError::RoundAlreadyDealt);
        }

        for person in self.table.people_mut() {
            person.set_hand(Hand::new());
        }

        for _pass in 0..2 {
            for person in self.table.people_mut() {
                let card = self.deck.deal_card()?;
                debug!("dealt {} to {}", card, person.name());
                person.receive_card(card)?;
            }
        }

        self.state = RoundState::TurnsPending;
        debug!("{}", self.table);
        Ok(())
    }

    /// Plays out the turn of the first person still waiting, hitting until their strategy stands.
    /// When nobody is left the round becomes complete. Each call finishes at most one person.
    pub fn next_turn(&mut self) -> Result<(), BlackjackGameError> {
        match self.state {
            RoundState::Dealing => return Err(BlackjackGameError::RoundNotDealt),
            RoundState::Complete => return Ok(()),
            RoundState::TurnsPending => {}
        }

        let deck = &mut *self.deck;
        let next = self.table.people_mut().find(|person| !person.turn_complete());
        match next {
            Some(person) => {
                while person.should_hit() {
                    let card = deck.deal_card()?;
                    debug!("{} hits and draws {}", person.name(), card);
                    person.receive_card(card)?;
                }
                person.complete_turn();
                debug!("{}", person);
            }
            None => {
                self.state = RoundState::Complete;
                debug!("round complete | {}", Outcome::resolve(self.table()));
            }
        }
        Ok(())
    }

    /// Returns the outcome, only available once the round is complete.
    pub fn outcome(&self) -> Result<Outcome, BlackjackGameError> {
        if !self.round_complete() {
            return Err(BlackjackGameError::RoundNotComplete);
        }
        Ok(Outcome::resolve(self.table()))
    }
}

impl Display for Round<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)
    }
}
