use std::fmt;
use std::str::FromStr;

use crate::domain::{AccountId, CardId, Error, NotificationId, TransferKind, TypeFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Transactions,
    Transfer,
    Cards,
    Notifications,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Transactions => "History",
            Tab::Transfer => "Transfer",
            Tab::Cards => "Cards",
            Tab::Notifications => "Alerts",
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Tab::Home),
            "transactions" | "history" => Ok(Tab::Transactions),
            "transfer" => Ok(Tab::Transfer),
            "cards" => Ok(Tab::Cards),
            "notifications" | "alerts" => Ok(Tab::Notifications),
            other => Err(Error::InvalidInput(format!("Unknown tab: {}", other))),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// One user interaction, as the presentation layer reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Login(Credentials),
    Biometric,
    Logout,
    Navigate(Tab),
    Render,
    Search(String),
    FilterType(TypeFilter),
    ToggleBalances,
    ToggleCardDetails,
    ToggleBlocked(CardId),
    SetSpendingLimit { card: CardId, limit: String },
    MarkRead(NotificationId),
    MarkAllRead,
    SelectTransfer(TransferKind),
    TransferFrom(AccountId),
    TransferTo(String),
    TransferAmount(String),
    TransferMemo(String),
    SubmitTransfer,
}

impl Event {
    /// Sign-in events are the only ones accepted while signed out.
    pub fn needs_session(&self) -> bool {
        !matches!(self, Event::Login(_) | Event::Biometric)
    }
}
