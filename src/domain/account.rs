use rust_decimal::Decimal;

pub type AccountId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
            AccountKind::Investment => "investment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    pub balance: Decimal,          // never mutated; transfers are simulated
    pub masked_number: String,     // e.g. ****6789
    pub currency: &'static str,
}

impl Account {
    /// Checking and savings accounts can fund a transfer; investments cannot.
    pub fn can_send(&self) -> bool {
        !matches!(self.kind, AccountKind::Investment)
    }
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}
