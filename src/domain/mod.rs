pub mod account;
pub mod card;
pub mod error;
pub mod event;
pub mod money;
pub mod notification;
pub mod style;
pub mod traits;
pub mod transaction;
pub mod transfer;
pub mod visibility;

pub use account::{Account, AccountId, AccountKind, total_balance};
pub use card::{Card, CardId, CardNetwork, Cards};
pub use error::Error;
pub use event::{Credentials, Event, Tab};
pub use notification::{Notification, NotificationId, NotificationKind, Notifications};
pub use traits::{AuthService, Delay, EventStream, Screen, SessionStorage, Toast, TransferService};
pub use transaction::{
    Category, Transaction, TransactionId, TransactionKind, TransactionQuery, TypeFilter, filter,
};
pub use transfer::{TransferForm, TransferKind, TransferRequest, TransferSummary};
pub use visibility::Visibility;
