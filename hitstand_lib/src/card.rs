use std::fmt::Display;

/// Number of cards in one standard deck.
pub const CARDS_PER_DECK: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Getter method for the suit's display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Returns every value a card of this rank may count as. Only the ace has more than one.
    pub fn possible_values(&self) -> &'static [u32] {
        match self {
            Rank::Ace => &[1, 11],
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
        }
    }

    /// Getter method for the short rank label used when displaying a card.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A single physical card. `id` is unique within the shoe it was built in, while `face_id`
/// repeats every 52 cards and only decides the suit and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: usize,
    face_id: usize,
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Associated function to create a new `Card` from its shoe id. Suit and rank are derived eagerly.
    pub fn new(id: usize) -> Card {
        let face_id = id % CARDS_PER_DECK;
        Card {
            id,
            face_id,
            suit: Suit::ALL[face_id / 13],
            rank: Rank::ALL[face_id % 13],
        }
    }

    /// Getter method for the card's id, unique within the shoe it was built in.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Getter method for the card's position within a single 52 card deck.
    pub fn face_id(&self) -> usize {
        self.face_id
    }

    /// Getter method for the card's suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Getter method for the card's rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns every value this card may count as.
    pub fn possible_values(&self) -> &'static [u32] {
        self.rank.possible_values()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
