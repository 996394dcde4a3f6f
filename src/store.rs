use crate::domain::{Account, Cards, Notifications, Transaction, total_balance};
use crate::seed;

use rust_decimal::Decimal;

/// Number of rows in the overview's recent-activity list.
pub const RECENT_LIMIT: usize = 4;

/// The canonical collections for one session. Screens borrow from here and
/// recompute their views on every read.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub accounts: Vec<Account>,
    pub cards: Cards,
    pub transactions: Vec<Transaction>,
    pub notifications: Notifications,
}

impl Store {
    pub fn new(
        accounts: Vec<Account>,
        cards: Cards,
        transactions: Vec<Transaction>,
        notifications: Notifications,
    ) -> Self {
        Self {
            accounts,
            cards,
            transactions,
            notifications,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            seed::accounts(),
            seed::cards(),
            seed::transactions(),
            seed::notifications(),
        )
    }

    pub fn total_balance(&self) -> Decimal {
        total_balance(&self.accounts)
    }

    pub fn recent_transactions(&self) -> &[Transaction] {
        let end = self.transactions.len().min(RECENT_LIMIT);
        &self.transactions[..end]
    }

    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_overview_numbers() {
        let store = Store::seeded();
        assert_eq!(store.total_balance(), Decimal::new(13645100, 2));
        let recent: Vec<u32> = store.recent_transactions().iter().map(|t| t.id).collect();
        assert_eq!(recent, vec![1, 2, 3, 4]);
        assert_eq!(store.account(2).map(|a| a.name.as_str()), Some("Savings Account"));
        assert!(store.account(9).is_none());
    }

    #[test]
    fn short_history_is_not_padded() {
        let mut store = Store::seeded();
        store.transactions.truncate(2);
        assert_eq!(store.recent_transactions().len(), 2);
        assert!(Store::default().recent_transactions().is_empty());
    }
}
