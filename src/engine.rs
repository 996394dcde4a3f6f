use crate::domain::money::{self, format_usd};
use crate::domain::{
    AuthService, Error, Event, EventStream, Screen, SessionStorage, Toast, TransferService,
};
use crate::render::{self, ViewState};
use crate::store::Store;

use futures::StreamExt;
use tracing::{debug, info, warn};

/// Drives one dashboard session: pulls user events, applies them to the
/// canonical store and reports the outcome on the screen.
#[derive(Debug)]
pub struct Engine<I, S, B, T>
where
    I: EventStream,
    S: SessionStorage,
    B: AuthService + TransferService,
    T: Screen,
{
    events: I,
    storage: S,
    bank: B,
    screen: T,
    store: Store,
    view: ViewState,
}

impl<I, S, B, T> Engine<I, S, B, T>
where
    I: EventStream,
    S: SessionStorage,
    B: AuthService + TransferService,
    T: Screen,
{
    pub fn new(events: I, storage: S, bank: B, screen: T, store: Store) -> Self {
        Self {
            events,
            storage,
            bank,
            screen,
            store,
            view: ViewState::default(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn screen(&self) -> &T {
        &self.screen
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        self.restore_session().await?;

        let mut events = self.events.stream();

        while let Some(event) = events.next().await {
            match event {
                Ok(event) => match self.apply(event).await {
                    Ok(()) => {}
                    Err(e) => {
                        warn!(error = %e, "event rejected");
                        self.screen.report(&e)
                    }
                },
                Err(e) => self.screen.report(&e),
            }
        }

        Ok(())
    }

    /// Reads the stored flag once, then lets the auth provider confirm it.
    pub async fn restore_session(&mut self) -> Result<(), Error> {
        let stored = self.storage.load()?;
        self.view.authenticated = self.bank.restore(stored).await;
        info!(authenticated = self.view.authenticated, "session restored");
        Ok(())
    }

    pub async fn apply(&mut self, event: Event) -> Result<(), Error> {
        if event.needs_session() && !self.view.authenticated {
            return Err(Error::SignInRequired);
        }
        debug!(?event, "applying");

        match event {
            Event::Login(credentials) => {
                self.bank.login(&credentials).await?;
                self.sign_in()?;
                self.screen
                    .toast(&Toast::new("Login Successful", "Welcome back to SecureBank"));
            }
            Event::Biometric => {
                self.bank.biometric().await?;
                self.sign_in()?;
                self.screen.toast(&Toast::new(
                    "Biometric Authentication",
                    "Fingerprint verified successfully",
                ));
            }
            Event::Logout => {
                self.storage.store(false)?;
                self.view = ViewState::default();
                info!("signed out");
            }
            Event::Navigate(tab) => {
                self.view.tab = tab;
                self.show()?;
            }
            Event::Render => self.show()?,
            Event::Search(text) => self.view.query.set_search(&text),
            Event::FilterType(kind) => self.view.query.kind = kind,
            Event::ToggleBalances => {
                self.view.balances.toggle();
            }
            Event::ToggleCardDetails => {
                self.view.card_details.toggle();
            }
            Event::ToggleBlocked(id) => {
                let card = self.store.cards.toggle_blocked(id)?;
                let toast = if card.blocked {
                    Toast::new("Card Blocked", "Your card has been blocked for security")
                } else {
                    Toast::new(
                        "Card Unblocked",
                        "Your card has been unblocked and is ready to use",
                    )
                };
                self.screen.toast(&toast);
            }
            Event::SetSpendingLimit { card, limit } => {
                let limit = money::parse_amount(&limit)?;
                self.store.cards.set_spending_limit(card, limit)?;
                self.screen.toast(&Toast::new(
                    "Spending Limit Updated",
                    format!("Daily spending limit set to {}", format_usd(limit)),
                ));
            }
            Event::MarkRead(id) => {
                self.store.notifications.mark_read(id)?;
            }
            Event::MarkAllRead => {
                let changed = self.store.notifications.mark_all_read();
                info!(changed, "notifications read");
            }
            Event::SelectTransfer(kind) => self.view.transfer.kind = Some(kind),
            Event::TransferFrom(id) => {
                match self.store.account(id) {
                    Some(account) if account.can_send() => {}
                    _ => return Err(Error::NotFound { entity: "account", id }),
                }
                self.view.transfer.from_account = Some(id);
            }
            Event::TransferTo(recipient) => self.view.transfer.recipient = recipient,
            Event::TransferAmount(amount) => self.view.transfer.amount = amount,
            Event::TransferMemo(memo) => self.view.transfer.memo = memo,
            Event::SubmitTransfer => {
                let request = self.view.transfer.validate()?;
                self.bank.submit(&request).await?;
                self.screen.toast(&Toast::new(
                    "Transfer Successful",
                    format!(
                        "{} has been transferred successfully",
                        format_usd(request.amount)
                    ),
                ));
                self.view.transfer.reset();
            }
        }

        Ok(())
    }

    fn sign_in(&mut self) -> Result<(), Error> {
        self.storage.store(true)?;
        self.view.authenticated = true;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Error> {
        let rendered = render::render(&self.store, &self.view);
        self.screen.show(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{InstantDelay, SimulatedBank};
    use crate::domain::{Credentials, Tab, TransactionKind, TransferKind, TypeFilter};
    use crate::ingestion::CsvReader;
    use crate::screen::RecordingScreen;
    use crate::storage::MemorySessionStorage;

    use rust_decimal::Decimal;

    type TestEngine = Engine<
        CsvReader<&'static [u8]>,
        MemorySessionStorage,
        SimulatedBank<InstantDelay>,
        RecordingScreen,
    >;

    /// Session storage whose writes always fail.
    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn load(&self) -> Result<bool, Error> {
            Ok(false)
        }

        fn store(&mut self, _: bool) -> Result<(), Error> {
            Err(Error::IO(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "session file is read-only",
            )))
        }
    }

    fn engine(script: &'static str, storage: MemorySessionStorage) -> TestEngine {
        Engine::new(
            CsvReader::new(script.as_bytes()),
            storage,
            SimulatedBank::instant(),
            RecordingScreen::default(),
            Store::seeded(),
        )
    }

    async fn signed_in() -> TestEngine {
        let mut engine = engine("action,target,value\n", MemorySessionStorage::signed_in());
        engine.restore_session().await.unwrap();
        engine
    }

    #[tokio::test]
    async fn dashboard_is_closed_until_sign_in() {
        let mut engine = engine("action,target,value\n", MemorySessionStorage::default());
        engine.restore_session().await.unwrap();
        assert!(!engine.view().authenticated);

        assert!(matches!(
            engine.apply(Event::ToggleBlocked(1)).await,
            Err(Error::SignInRequired)
        ));
        assert!(!engine.store().cards.get(1).unwrap().blocked);

        let bad = Credentials {
            username: "alice".into(),
            password: String::new(),
        };
        assert!(matches!(
            engine.apply(Event::Login(bad)).await,
            Err(Error::AuthenticationFailed)
        ));
        assert!(!engine.view().authenticated);

        engine.apply(Event::Biometric).await.unwrap();
        assert!(engine.view().authenticated);
        assert!(engine.storage.load().unwrap());
        assert_eq!(
            engine.screen().toast_titles(),
            vec!["Biometric Authentication"]
        );
    }

    #[tokio::test]
    async fn logout_clears_flag_and_view_but_keeps_store() {
        let mut engine = signed_in().await;
        engine.apply(Event::ToggleBlocked(2)).await.unwrap();
        engine.apply(Event::Navigate(Tab::Cards)).await.unwrap();
        engine.apply(Event::Logout).await.unwrap();

        assert!(!engine.view().authenticated);
        assert_eq!(engine.view().tab, Tab::Home);
        assert!(!engine.storage.load().unwrap());
        assert!(engine.store().cards.get(2).unwrap().blocked);
    }

    #[tokio::test]
    async fn card_mutations_are_visible_to_the_next_render() {
        let mut engine = signed_in().await;

        engine.apply(Event::ToggleBlocked(1)).await.unwrap();
        engine
            .apply(Event::SetSpendingLimit {
                card: 1,
                limit: "500".into(),
            })
            .await
            .unwrap();
        engine.apply(Event::Navigate(Tab::Cards)).await.unwrap();

        let view = engine.screen().last_view().unwrap();
        assert!(view.contains("Status Blocked  Daily Spending Limit $500.00"));
        assert!(view.contains("Status Active  Daily Spending Limit $5,000.00"));
        assert_eq!(
            engine.screen().toast_titles(),
            vec!["Card Blocked", "Spending Limit Updated"]
        );
        assert_eq!(
            engine.screen().toasts[1].1,
            "Daily spending limit set to $500.00"
        );
    }

    #[tokio::test]
    async fn bad_limits_leave_card_untouched() {
        let mut engine = signed_in().await;
        for limit in ["-5", "0", "lots"] {
            let result = engine
                .apply(Event::SetSpendingLimit {
                    card: 1,
                    limit: limit.into(),
                })
                .await;
            assert!(matches!(result, Err(Error::InvalidInput(_))), "{}", limit);
        }
        assert_eq!(
            engine.store().cards.get(1).unwrap().spending_limit,
            Decimal::new(2500, 0)
        );
        assert!(matches!(
            engine.apply(Event::ToggleBlocked(7)).await,
            Err(Error::NotFound { entity: "card", .. })
        ));
    }

    #[tokio::test]
    async fn history_follows_search_and_type() {
        let mut engine = signed_in().await;
        engine.apply(Event::Search("STARBUCKS".into())).await.unwrap();
        engine.apply(Event::Navigate(Tab::Transactions)).await.unwrap();
        let view = engine.screen().last_view().unwrap();
        assert!(view.contains("Starbucks Coffee"));
        assert!(!view.contains("Salary Deposit"));

        engine.apply(Event::Search(String::new())).await.unwrap();
        engine
            .apply(Event::FilterType(TypeFilter::Only(TransactionKind::Credit)))
            .await
            .unwrap();
        engine.apply(Event::Render).await.unwrap();
        let view = engine.screen().last_view().unwrap();
        assert!(view.contains("Salary Deposit"));
        assert!(view.contains("Freelance Payment"));
        assert!(!view.contains("Starbucks"));
    }

    #[tokio::test]
    async fn notifications_walkthrough() {
        let mut engine = signed_in().await;
        assert_eq!(engine.store().notifications.unread_count(), 4);

        engine.apply(Event::MarkRead(1)).await.unwrap();
        assert_eq!(engine.store().notifications.unread_count(), 3);

        assert!(matches!(
            engine.apply(Event::MarkRead(99)).await,
            Err(Error::NotFound { .. })
        ));
        assert_eq!(engine.store().notifications.unread_count(), 3);

        engine.apply(Event::MarkAllRead).await.unwrap();
        engine.apply(Event::MarkAllRead).await.unwrap();
        assert_eq!(engine.store().notifications.unread_count(), 0);
    }

    #[tokio::test]
    async fn transfer_submission_resets_form() {
        let mut engine = signed_in().await;

        assert!(matches!(
            engine.apply(Event::SubmitTransfer).await,
            Err(Error::MissingFields)
        ));
        assert!(matches!(
            engine.apply(Event::TransferFrom(3)).await,
            Err(Error::NotFound { entity: "account", id: 3 })
        ));

        engine
            .apply(Event::SelectTransfer(TransferKind::External))
            .await
            .unwrap();
        engine.apply(Event::TransferFrom(1)).await.unwrap();
        engine.apply(Event::TransferTo("jane@example.com".into())).await.unwrap();
        engine.apply(Event::TransferAmount("1200.5".into())).await.unwrap();
        engine.apply(Event::TransferMemo("rent".into())).await.unwrap();
        engine.apply(Event::SubmitTransfer).await.unwrap();

        assert_eq!(
            engine.screen().toasts.last().unwrap().1,
            "$1,200.50 has been transferred successfully"
        );
        let form = &engine.view().transfer;
        assert_eq!(form.kind, Some(TransferKind::External));
        assert_eq!(form.from_account, Some(1));
        assert!(form.amount.is_empty() && form.recipient.is_empty() && form.memo.is_empty());
        // simulated rail, balances stay put
        assert_eq!(
            engine.store().account(1).unwrap().balance,
            Decimal::new(1250075, 2)
        );
    }

    #[tokio::test]
    async fn process_reports_errors_and_keeps_going() {
        let mut engine = engine(
            "action,target,value\n\
             tab,home,\n\
             login,alice,\n\
             login,alice,secret\n\
             jump,,\n\
             read,2,\n\
             tab,alerts,\n",
            MemorySessionStorage::default(),
        );
        engine.process().await.unwrap();

        let screen = engine.screen();
        assert_eq!(screen.errors.len(), 3);
        assert!(screen.errors[0].starts_with("[Signed Out]"));
        assert!(screen.errors[1].starts_with("[Invalid Credentials]"));
        assert!(screen.errors[2].starts_with("[Something Went Wrong]"));
        assert_eq!(screen.toast_titles(), vec!["Login Successful"]);
        assert_eq!(screen.views.len(), 1);
        assert!(screen.views[0].contains("3 new"));
    }

    #[tokio::test]
    async fn unsaved_sign_in_shows_no_success_toast() {
        let mut engine = Engine::new(
            CsvReader::new("action,target,value\n".as_bytes()),
            ReadOnlyStorage,
            SimulatedBank::instant(),
            RecordingScreen::default(),
            Store::seeded(),
        );
        engine.restore_session().await.unwrap();

        assert!(matches!(engine.apply(Event::Biometric).await, Err(Error::IO(_))));
        let creds = Credentials {
            username: "alice".into(),
            password: "secret".into(),
        };
        assert!(matches!(engine.apply(Event::Login(creds)).await, Err(Error::IO(_))));

        assert!(engine.screen().toasts.is_empty());
        assert!(!engine.view().authenticated);
    }
}
