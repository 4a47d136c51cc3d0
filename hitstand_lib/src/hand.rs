use crate::card::Card;
use crate::error::BlackjackGameError;
use std::collections::BTreeSet;
use std::fmt::Display;

/// The cards held by one participant, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function to create a new, empty `Hand`. Each call owns its own storage.
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    /// Appends `card`, refusing a card whose id is already held.
    pub fn add_card(&mut self, card: Card) -> Result<(), BlackjackGameError> {
        if self.cards.iter().any(|c| c.id() == card.id()) {
            return Err(BlackjackGameError::DuplicateCard { id: card.id() });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Getter method for the cards in the order they were received.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every distinct total reachable by picking one value per card. An empty hand totals 0.
    /// Recomputed on each call so it always reflects the current cards.
    pub fn values(&self) -> BTreeSet<u32> {
        self.cards
            .iter()
            .fold(BTreeSet::from([0]), |totals, card| {
                totals
                    .iter()
                    .flat_map(|total| card.possible_values().iter().map(move |v| total + v))
                    .collect()
            })
    }

    /// True only when even the smallest total is over 21.
    pub fn busted(&self) -> bool {
        self.values().first().map_or(false, |min| *min > 21)
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(" / ");
        write!(f, "⎡{}⎦", cards)
    }
}
