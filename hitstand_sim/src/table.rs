use crate::participant::Participant;
use hitstand_lib::{BlackjackGameError, Card};
use std::collections::HashSet;
use std::fmt::Display;

/// The fixed roster for a simulation, one dealer and an ordered list of players.
/// Turns are taken in "people" order: every player first, the dealer last.
pub struct Table {
    dealer: Participant,
    players: Vec<Participant>,
}

impl Table {
    /// Associated function to seat a new table. Names must be unique since outcomes are recorded by name.
    pub fn new(dealer: Participant, players: Vec<Participant>) -> Result<Table, BlackjackGameError> {
        {
            let mut names = HashSet::new();
            for person in players.iter().chain(std::iter::once(&dealer)) {
                if !names.insert(person.name()) {
                    return Err(BlackjackGameError::DuplicateName(person.name().to_string()));
                }
            }
        }
        Ok(Table { dealer, players })
    }

    /// Getter method for the dealer.
    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Getter method for the players in seat order.
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Players in seat order followed by the dealer.
    pub fn people(&self) -> impl Iterator<Item = &Participant> {
        self.players.iter().chain(std::iter::once(&self.dealer))
    }

    /// Mutable version of `people`, same order.
    pub fn people_mut(&mut self) -> impl Iterator<Item = &mut Participant> {
        self.players
            .iter_mut()
            .chain(std::iter::once(&mut self.dealer))
    }

    /// Every card on the table except each participant's first, face down, card.
    pub fn visible_cards(&self) -> Vec<Card> {
        self.people()
            .filter_map(|person| person.hand())
            .flat_map(|hand| hand.cards().iter().skip(1).copied())
            .collect()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dealer)?;
        for player in &self.players {
            write!(f, "\t{}", player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::DealerStrategy;
    use hitstand_lib::Hand;

    fn seat(name: &str) -> Participant {
        Participant::new(name, DealerStrategy::default())
    }

    #[test]
    fn people_puts_dealer_last() {
        let table = Table::new(seat("Dealer"), vec![seat("A"), seat("B")]).unwrap();
        let names: Vec<&str> = table.people().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B", "Dealer"]);
        assert_eq!(table.players().len(), 2);
        assert_eq!(table.dealer().name(), "Dealer");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = Table::new(seat("Dealer"), vec![seat("A"), seat("A")]);
        assert!(matches!(result, Err(BlackjackGameError::DuplicateName(name)) if name == "A"));

        let result = Table::new(seat("A"), vec![seat("A")]);
        assert!(matches!(result, Err(BlackjackGameError::DuplicateName(_))));
    }

    #[test]
    fn hole_cards_stay_hidden() {
        let mut table = Table::new(seat("Dealer"), vec![seat("A")]).unwrap();
        assert!(table.visible_cards().is_empty());

        for (person, ids) in table.people_mut().zip([[0, 1], [2, 3]]) {
            let mut hand = Hand::new();
            for id in ids {
                hand.add_card(Card::new(id)).unwrap();
            }
            person.set_hand(hand);
        }

        let visible: Vec<usize> = table.visible_cards().iter().map(|c| c.id()).collect();
        assert_eq!(visible, vec![1, 3]);
    }
}
