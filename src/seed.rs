//! Static data a fresh session starts from.

use rust_decimal::Decimal;

use crate::domain::{
    Account, AccountKind, Card, CardNetwork, Cards, Category, Notification, NotificationKind,
    Notifications, Transaction,
};

pub fn accounts() -> Vec<Account> {
    vec![
        account(1, "Checking Account", AccountKind::Checking, 1250075, "****6789"),
        account(2, "Savings Account", AccountKind::Savings, 4500000, "****4321"),
        account(3, "Investment Account", AccountKind::Investment, 7895025, "****9876"),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    use Category::*;

    vec![
        tx(1, "Starbucks Coffee", -450, FoodAndDining, "2025-06-12", "08:30 AM"),
        tx(2, "Salary Deposit", 320000, Income, "2025-06-11", "09:00 AM"),
        tx(3, "Amazon Purchase", -6789, Shopping, "2025-06-10", "02:15 PM"),
        tx(4, "ATM Withdrawal", -10000, Cash, "2025-06-10", "11:45 AM"),
        tx(5, "Netflix Subscription", -1599, Entertainment, "2025-06-09", "06:00 PM"),
        tx(6, "Freelance Payment", 75000, Income, "2025-06-08", "03:30 PM"),
        tx(7, "Grocery Store", -8945, FoodAndDining, "2025-06-07", "05:20 PM"),
        tx(8, "Gas Station", -4560, Transportation, "2025-06-06", "07:45 AM"),
    ]
}

pub fn cards() -> Cards {
    Cards::new(vec![
        Card {
            id: 1,
            name: "SecureBank Visa".to_string(),
            network: CardNetwork::Debit,
            masked_number: "4532 **** **** 6789".to_string(),
            full_number: "4532 1234 5678 6789".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
            blocked: false,
            spending_limit: Decimal::new(2500, 0),
            balance: Decimal::new(1250075, 2),
        },
        Card {
            id: 2,
            name: "SecureBank Mastercard".to_string(),
            network: CardNetwork::Credit,
            masked_number: "5555 **** **** 4321".to_string(),
            full_number: "5555 1234 5678 4321".to_string(),
            expiry: "09/26".to_string(),
            cvv: "456".to_string(),
            blocked: false,
            spending_limit: Decimal::new(5000, 0),
            balance: Decimal::new(125030, 2),
        },
    ])
}

pub fn notifications() -> Notifications {
    type K = NotificationKind;

    Notifications::new(vec![
        Notification::new(
            1,
            "Transaction Alert",
            "Purchase at Starbucks Coffee for $4.50",
            K::Transaction,
            "2 minutes ago",
            false,
        ),
        Notification::new(
            2,
            "Security Alert",
            "New device login detected from iPhone 14",
            K::Security,
            "1 hour ago",
            false,
        ),
        Notification::new(
            3,
            "Card Update",
            "Your card spending limit has been updated",
            K::Card,
            "3 hours ago",
            true,
        ),
        Notification::new(
            4,
            "Payment Reminder",
            "Credit card payment due in 3 days",
            K::Reminder,
            "1 day ago",
            false,
        ),
        Notification::new(
            5,
            "Transaction Alert",
            "Salary deposit of $3,200.00 received",
            K::Transaction,
            "2 days ago",
            false,
        ),
        Notification::new(
            6,
            "Security Alert",
            "Password changed successfully",
            K::Security,
            "3 days ago",
            true,
        ),
    ])
}

fn account(id: u32, name: &str, kind: AccountKind, cents: i64, masked: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        kind,
        balance: Decimal::new(cents, 2),
        masked_number: masked.to_string(),
        currency: "USD",
    }
}

fn tx(
    id: u32,
    description: &str,
    cents: i64,
    category: Category,
    date: &str,
    time: &str,
) -> Transaction {
    Transaction {
        id,
        description: description.to_string(),
        amount: Decimal::new(cents, 2),
        category,
        date: date.to_string(),
        time: time.to_string(),
    }
}
