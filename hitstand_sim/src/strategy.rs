//! Hit/stand policies. A `Strategy` only ever looks at the hand it is handed, so the same
//! policy object can be reused across rounds without rebinding.

use hitstand_lib::Hand;

/// Highest total that is still in play.
pub const BLACKJACK: u32 = 21;

/// A trait for any hit/stand policy. Round and game logic only talk to this trait,
/// so new policies can be added without touching them.
pub trait Strategy {
    /// Returns the best total no greater than 21, or `None` when the hand is busted.
    fn primary_value(&self, hand: &Hand) -> Option<u32> {
        if hand.busted() {
            return None;
        }
        hand.values().into_iter().filter(|v| *v <= BLACKJACK).max()
    }

    /// Required method, decides whether the owner of `hand` draws another card.
    fn should_hit(&self, hand: &Hand) -> bool;

    /// Required method, a short human readable name for the policy.
    fn label(&self) -> String;
}

/// Hits while the primary value is at or below `max_hit_value`, stands otherwise.
/// Used for the dealer and, by default, for every player too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerStrategy {
    max_hit_value: u32,
}

impl DealerStrategy {
    pub const DEFAULT_MAX_HIT_VALUE: u32 = 16;

    /// Associated function to create a new `DealerStrategy` that hits on `max_hit_value` or lower.
    pub fn new(max_hit_value: u32) -> DealerStrategy {
        DealerStrategy { max_hit_value }
    }

    /// Getter method for the highest total this strategy still hits on.
    pub fn max_hit_value(&self) -> u32 {
        self.max_hit_value
    }
}

impl Default for DealerStrategy {
    fn default() -> Self {
        DealerStrategy::new(DealerStrategy::DEFAULT_MAX_HIT_VALUE)
    }
}

impl Strategy for DealerStrategy {
    fn should_hit(&self, hand: &Hand) -> bool {
        match self.primary_value(hand) {
            Some(value) => value <= self.max_hit_value,
            None => false,
        }
    }

    fn label(&self) -> String {
        format!("hit on {} or less", self.max_hit_value)
    }
}
