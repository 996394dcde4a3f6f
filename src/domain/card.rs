use rust_decimal::Decimal;
use tracing::info;

use crate::domain::Error;

pub type CardId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardNetwork {
    Debit,
    Credit,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Debit => "Debit",
            CardNetwork::Credit => "Credit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub network: CardNetwork,
    pub masked_number: String,
    pub full_number: String,
    pub expiry: String,
    pub cvv: String,
    pub blocked: bool,
    pub spending_limit: Decimal,
    pub balance: Decimal,
}

impl Card {
    pub fn status(&self) -> &'static str {
        if self.blocked { "Blocked" } else { "Active" }
    }
}

/// The canonical card collection. Every screen reads the same instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cards {
    cards: Vec<Card>,
}

impl Cards {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CardId) -> Result<&mut Card, Error> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::NotFound { entity: "card", id })
    }

    pub fn toggle_blocked(&mut self, id: CardId) -> Result<&Card, Error> {
        let card = self.get_mut(id)?;
        card.blocked = !card.blocked;
        info!(card = id, blocked = card.blocked, "card status changed");
        Ok(card)
    }

    pub fn set_spending_limit(&mut self, id: CardId, limit: Decimal) -> Result<&Card, Error> {
        if limit <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Spending limit must be greater than zero".to_string(),
            ));
        }

        let card = self.get_mut(id)?;
        card.spending_limit = limit;
        info!(card = id, %limit, "spending limit updated");
        Ok(card)
    }
}
