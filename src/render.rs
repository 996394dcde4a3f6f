//! Text rendering of each dashboard tab. Sensitive values are resolved through
//! [`Visibility`] here, before anything reaches a [`Screen`](crate::domain::Screen).

use crate::domain::money::{format_signed, format_usd};
use crate::domain::style::{category_style, notification_icon_tone, notification_style};
use crate::domain::transfer::{destination_accounts, source_accounts};
use crate::domain::visibility::{BALANCE_MASK, CVV_MASK};
use crate::domain::{Tab, TransactionQuery, TransferForm, TransferKind, Visibility};
use crate::store::Store;

pub const EMPTY_HISTORY: &str = "No transactions found matching your criteria.";

/// Per-session presentation state. Dropped on logout; the store is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub authenticated: bool,
    pub tab: Tab,
    pub query: TransactionQuery,
    pub balances: Visibility,
    pub card_details: Visibility,
    pub transfer: TransferForm,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            authenticated: false,
            tab: Tab::Home,
            query: TransactionQuery::default(),
            balances: Visibility::revealed(),
            card_details: Visibility::hidden(),
            transfer: TransferForm::default(),
        }
    }
}

pub fn render(store: &Store, view: &ViewState) -> String {
    let mut lines = vec![format!("== {} ==", view.tab.label())];
    match view.tab {
        Tab::Home => overview(store, view, &mut lines),
        Tab::Transactions => history(store, &view.query, &mut lines),
        Tab::Transfer => transfer(store, &view.transfer, &mut lines),
        Tab::Cards => cards(store, view.card_details, &mut lines),
        Tab::Notifications => notifications(store, &mut lines),
    }
    lines.join("\n")
}

fn overview(store: &Store, view: &ViewState, lines: &mut Vec<String>) {
    let total = format_usd(store.total_balance());
    lines.push(format!(
        "Total Balance: {}",
        view.balances.resolve(&total, BALANCE_MASK)
    ));

    for account in &store.accounts {
        let balance = format_usd(account.balance);
        lines.push(format!(
            "{} {}  {}  {}",
            account.name,
            account.masked_number,
            view.balances.resolve(&balance, BALANCE_MASK),
            account.kind.as_str()
        ));
    }

    lines.push("Recent Transactions".to_string());
    for tx in store.recent_transactions() {
        lines.push(format!(
            "  {}  {}  {}",
            tx.description,
            tx.date,
            format_signed(tx.amount)
        ));
    }
}

fn history(store: &Store, query: &TransactionQuery, lines: &mut Vec<String>) {
    lines.push(format!(
        "Search: \"{}\"  Type: {}",
        query.search(),
        query.kind.as_str()
    ));

    let visible = query.apply(&store.transactions);
    if visible.is_empty() {
        lines.push(EMPTY_HISTORY.to_string());
        return;
    }

    for tx in visible {
        lines.push(format!(
            "  {}  [{}|{}]  {} at {}  {}",
            tx.description,
            tx.category.label(),
            category_style(tx.category).badge.as_str(),
            tx.date,
            tx.time,
            format_signed(tx.amount)
        ));
    }
}

fn transfer(store: &Store, form: &TransferForm, lines: &mut Vec<String>) {
    for kind in TransferKind::ALL {
        let marker = if form.kind == Some(kind) { ">" } else { " " };
        lines.push(format!("{} {} - {}", marker, kind.title(), kind.description()));
    }

    let Some(kind) = form.kind else {
        return;
    };
    lines.push(format!("-- {} --", kind.title()));

    let from = form.from_account.and_then(|id| store.account(id));
    match from {
        Some(account) => lines.push(format!(
            "From Account: {} {} ({})",
            account.name,
            account.masked_number,
            format_usd(account.balance)
        )),
        None => {
            let options: Vec<String> = source_accounts(&store.accounts)
                .iter()
                .map(|a| format!("{} {}", a.name, a.masked_number))
                .collect();
            lines.push(format!("From Account: (select: {})", options.join(", ")));
        }
    }

    if kind == TransferKind::Internal {
        let options: Vec<String> = destination_accounts(&store.accounts, form.from_account)
            .iter()
            .map(|a| format!("{} {}", a.name, a.masked_number))
            .collect();
        lines.push(format!(
            "{}: {} (options: {})",
            kind.recipient_label(),
            form.recipient,
            options.join(", ")
        ));
    } else {
        lines.push(format!("{}: {}", kind.recipient_label(), form.recipient));
    }

    lines.push(format!("Amount: {}", form.amount));
    lines.push(format!("Memo: {}", form.memo));

    if let Some(summary) = form.summary() {
        lines.push(format!(
            "Amount: {}  Transfer Fee: {}  Total: {}",
            format_usd(summary.amount),
            format_usd(summary.fee),
            format_usd(summary.total)
        ));
    }
}

fn cards(store: &Store, details: Visibility, lines: &mut Vec<String>) {
    for card in store.cards.iter() {
        lines.push(format!(
            "{} ({})  Balance {}",
            card.name,
            card.network.as_str(),
            format_usd(card.balance)
        ));
        lines.push(format!(
            "  Number {}  Expires {}  CVV {}",
            details.resolve(&card.full_number, &card.masked_number),
            card.expiry,
            details.resolve(&card.cvv, CVV_MASK)
        ));
        lines.push(format!(
            "  Status {}  Daily Spending Limit {}",
            card.status(),
            format_usd(card.spending_limit)
        ));
    }
}

fn notifications(store: &Store, lines: &mut Vec<String>) {
    let center = &store.notifications;
    if let Some(badge) = center.badge() {
        lines.push(badge);
    }

    if center.is_empty() {
        lines.push("No notifications".to_string());
        lines.push(
            "You're all caught up! We'll notify you when something important happens."
                .to_string(),
        );
        return;
    }

    for n in center.iter() {
        let marker = if n.is_read() { " " } else { "*" };
        let style = notification_style(n.kind);
        let icon = style.icon.map(|i| i.as_str()).unwrap_or_default();
        lines.push(format!(
            "{} ({}:{}) {}  [{}|{}]  {}",
            marker,
            icon,
            notification_icon_tone(n.kind, n.is_read()).as_str(),
            n.title,
            n.kind.as_str(),
            style.badge.as_str(),
            n.time
        ));
        lines.push(format!("    {}", n.message));
    }
}
