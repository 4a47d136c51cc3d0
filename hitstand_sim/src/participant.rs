use crate::strategy::Strategy;
use hitstand_lib::{BlackjackGameError, Card, Hand};
use std::fmt::Display;

/// Someone seated at the table, dealer or player. Binds a name, a hit/stand policy and the
/// hand currently being played.
pub struct Participant {
    name: String,
    strategy: Box<dyn Strategy>,
    hand: Option<Hand>,
    turn_complete: bool,
}

impl Participant {
    /// Associated function to create a new `Participant` who has not been dealt in yet.
    pub fn new<S: Strategy + 'static>(name: impl Into<String>, strategy: S) -> Participant {
        Participant::with_boxed_strategy(name, Box::new(strategy))
    }

    /// Same as `new`, for a strategy that is already boxed.
    pub fn with_boxed_strategy(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Participant {
        Participant {
            name: name.into(),
            strategy,
            hand: None,
            turn_complete: false,
        }
    }

    /// Getter method for the participant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Getter method for the participant's hit/stand policy.
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Getter method for the current hand, `None` before the first deal.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Replaces the current hand. The strategy always evaluates whatever hand is held here.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    /// Adds `card` to the current hand, fails if the participant has not been dealt a hand.
    pub fn receive_card(&mut self, card: Card) -> Result<(), BlackjackGameError> {
        match self.hand.as_mut() {
            Some(hand) => hand.add_card(card),
            None => Err(BlackjackGameError::RoundNotDealt),
        }
    }

    /// Asks the strategy whether to draw another card, false without a hand.
    pub fn should_hit(&self) -> bool {
        self.hand
            .as_ref()
            .map_or(false, |hand| self.strategy.should_hit(hand))
    }

    /// The strategy's best total for the held hand, `None` when busted or without a hand.
    pub fn primary_value(&self) -> Option<u32> {
        self.hand
            .as_ref()
            .and_then(|hand| self.strategy.primary_value(hand))
    }

    /// Returns true when the held hand is busted.
    pub fn busted(&self) -> bool {
        self.hand.as_ref().map_or(false, Hand::busted)
    }

    /// Method for determining whether the participant's turn is over.
    pub fn turn_complete(&self) -> bool {
        self.turn_complete
    }

    /// Marks the participant's turn as over for this round.
    pub fn complete_turn(&mut self) {
        self.turn_complete = true;
    }

    /// Marks the participant as waiting for a turn, done at the start of every round.
    pub fn reset_turn(&mut self) {
        self.turn_complete = false;
    }

    fn turn_indicator(&self) -> &'static str {
        if !self.turn_complete {
            "❓"
        } else if self.busted() {
            "❌"
        } else {
            "🔵"
        }
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hand = match &self.hand {
            Some(hand) => hand.to_string(),
            None => "(No Hand)".to_string(),
        };
        write!(f, "〔{:^8}〕{}{}", self.name, hand, self.turn_indicator())
    }
}
