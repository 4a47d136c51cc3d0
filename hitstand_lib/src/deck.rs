use crate::card::{Card, CARDS_PER_DECK};
use crate::error::BlackjackGameError;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt::Display;

/// An ordered shoe of cards, dealt from the front. A dealt card never comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Associated function to create a single, unshuffled 52 card deck.
    pub fn new() -> Deck {
        Deck::with_decks(1)
    }

    /// Builds a shoe of `num_decks` standard decks concatenated in ascending id order, ids `0..52 * num_decks`.
    /// The shoe is not shuffled. `52 * num_decks` must fit in a `usize`.
    pub fn with_decks(num_decks: usize) -> Deck {
        Deck {
            cards: (0..CARDS_PER_DECK * num_decks).map(Card::new).collect(),
        }
    }

    /// Builds a deck that deals `cards` in exactly the given order.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Deck {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    /// Randomly permutes the cards still in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        trace!("shuffled {} remaining cards", self.cards.len());
    }

    /// Removes and returns the front card, or `DeckExhausted` when nothing is left.
    pub fn deal_card(&mut self) -> Result<Card, BlackjackGameError> {
        self.cards
            .pop_front()
            .ok_or(BlackjackGameError::DeckExhausted)
    }

    /// Returns the number of cards left to deal.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview = self
            .cards
            .iter()
            .take(5)
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join("⎦  ⎡");
        let more = if self.cards.len() > 5 { "..." } else { "" };
        write!(f, "⎡{}⎦{}({} cards)", preview, more, self.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn single_deck_deals_every_id_once() {
        let mut deck = Deck::new();
        let mut seen = HashSet::new();
        for _ in 0..52 {
            let card = deck.deal_card().unwrap();
            assert!(seen.insert(card.id()));
        }
        assert_eq!(seen, (0..52).collect::<HashSet<usize>>());
        assert!(deck.is_empty());
        assert_eq!(deck.deal_card(), Err(BlackjackGameError::DeckExhausted));
    }

    #[test]
    fn multi_deck_is_ordered_before_shuffle() {
        let deck = Deck::with_decks(6);
        assert_eq!(deck.len(), 312);
        assert!(deck.iter().map(|c| c.id()).eq(0..312));
    }

    #[test]
    fn shuffle_only_permutes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::with_decks(6);
        let before: Vec<usize> = deck.iter().map(|c| c.id()).collect();

        deck.shuffle(&mut rng);
        let after: Vec<usize> = deck.iter().map(|c| c.id()).collect();

        assert_eq!(after.len(), 312);
        assert_ne!(before, after);
        assert_eq!(
            before.iter().collect::<HashSet<_>>(),
            after.iter().collect::<HashSet<_>>()
        );
    }

    #[test]
    fn shuffle_leaves_dealt_cards_out() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::new();
        let dealt = deck.deal_card().unwrap();
        deck.shuffle(&mut rng);
        assert_eq!(deck.len(), 51);
        assert!(deck.iter().all(|c| c.id() != dealt.id()));
    }

    #[test]
    fn stacked_deck_deals_in_given_order() {
        let mut deck = Deck::from_cards([Card::new(9), Card::new(0)]);
        assert_eq!(deck.deal_card().unwrap().id(), 9);
        assert_eq!(deck.deal_card().unwrap().id(), 0);
        assert!(deck.deal_card().is_err());
    }

    #[test]
    fn display_previews_front_cards() {
        let deck = Deck::new();
        assert_eq!(deck.to_string(), "⎡A♣⎦  ⎡2♣⎦  ⎡3♣⎦  ⎡4♣⎦  ⎡5♣⎦...(52 cards)");
        let short = Deck::from_cards([Card::new(12)]);
        assert_eq!(short.to_string(), "⎡K♣⎦(1 cards)");
    }
}
