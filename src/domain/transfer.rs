use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{Account, AccountId, Error, money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Internal,
    External,
    Mobile,
    Scheduled,
}

impl TransferKind {
    pub const ALL: [TransferKind; 4] = [
        TransferKind::Internal,
        TransferKind::External,
        TransferKind::Mobile,
        TransferKind::Scheduled,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TransferKind::Internal => "Internal Transfer",
            TransferKind::External => "External Transfer",
            TransferKind::Mobile => "Mobile Top-up",
            TransferKind::Scheduled => "Schedule Transfer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransferKind::Internal => "Between your accounts",
            TransferKind::External => "To other banks",
            TransferKind::Mobile => "Airtime & data",
            TransferKind::Scheduled => "Set future transfers",
        }
    }

    pub fn recipient_label(&self) -> &'static str {
        match self {
            TransferKind::Internal => "To Account",
            TransferKind::Mobile => "Phone Number",
            TransferKind::External | TransferKind::Scheduled => "Recipient",
        }
    }
}

impl FromStr for TransferKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(TransferKind::Internal),
            "external" => Ok(TransferKind::External),
            "mobile" => Ok(TransferKind::Mobile),
            "scheduled" => Ok(TransferKind::Scheduled),
            other => Err(Error::InvalidInput(format!(
                "Unknown transfer type: {}",
                other
            ))),
        }
    }
}

/// What the transfer screen has collected so far. Fields stay raw until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub kind: Option<TransferKind>,
    pub from_account: Option<AccountId>,
    pub amount: String,
    pub recipient: String,
    pub memo: String,
}

/// A validated form, ready for the payment rail.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub kind: TransferKind,
    pub from_account: AccountId,
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferSummary {
    pub amount: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
}

impl TransferSummary {
    pub fn for_amount(amount: Decimal) -> Self {
        let fee = Decimal::ZERO;
        Self {
            amount,
            fee,
            total: amount + fee,
        }
    }
}

impl TransferForm {
    /// Shown once both an amount and a source account are present.
    pub fn summary(&self) -> Option<TransferSummary> {
        self.from_account?;
        let amount = money::parse_amount(&self.amount).ok()?;
        Some(TransferSummary::for_amount(amount))
    }

    pub fn validate(&self) -> Result<TransferRequest, Error> {
        let (Some(kind), Some(from_account)) = (self.kind, self.from_account) else {
            return Err(Error::MissingFields);
        };
        if self.amount.trim().is_empty() {
            return Err(Error::MissingFields);
        }

        let amount = money::parse_amount(&self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Transfer amount must be greater than zero".to_string(),
            ));
        }

        Ok(TransferRequest {
            kind,
            from_account,
            amount,
            recipient: non_empty(&self.recipient),
            memo: non_empty(&self.memo),
        })
    }

    /// Clears the per-transfer fields; type and source account stay selected.
    pub fn reset(&mut self) {
        self.amount.clear();
        self.recipient.clear();
        self.memo.clear();
    }
}

/// Accounts that may fund a transfer.
pub fn source_accounts(accounts: &[Account]) -> Vec<&Account> {
    accounts.iter().filter(|a| a.can_send()).collect()
}

/// Internal transfer targets: every other funding account.
pub fn destination_accounts(accounts: &[Account], from: Option<AccountId>) -> Vec<&Account> {
    accounts
        .iter()
        .filter(|a| a.can_send() && Some(a.id) != from)
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
