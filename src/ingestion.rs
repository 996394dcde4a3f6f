use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::EventStream;
use crate::domain::{Credentials, Error, Event, Tab, TransferKind, TypeFilter};

/// Reads a script of user actions: `action,target,value` per row.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    target: Option<String>,
    value: Option<String>,
}

impl CsvRow {
    fn id(&self) -> Result<u32, Error> {
        let raw = self.target.as_deref().unwrap_or_default();
        raw.parse().map_err(|_| {
            Error::Ingestion(format!("'{}' needs a numeric target, got '{}'", self.action, raw))
        })
    }

    fn value(&self) -> String {
        self.value.clone().unwrap_or_default()
    }

    fn parsed<T: FromStr<Err = Error>>(&self) -> Result<T, Error> {
        self.value().parse().map_err(|e: Error| Error::Ingestion(e.to_string()))
    }

    fn target_parsed<T: FromStr<Err = Error>>(&self) -> Result<T, Error> {
        let raw = self.target.as_deref().unwrap_or_default();
        raw.parse().map_err(|e: Error| Error::Ingestion(e.to_string()))
    }
}

impl TryFrom<CsvRow> for Event {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let event = match row.action.to_ascii_lowercase().as_str() {
            "login" => Event::Login(Credentials {
                username: row.target.clone().unwrap_or_default(),
                password: row.value(),
            }),
            "biometric" => Event::Biometric,
            "logout" => Event::Logout,
            "tab" => Event::Navigate(row.target_parsed::<Tab>()?),
            "render" => Event::Render,
            "search" => Event::Search(row.value()),
            "type" => Event::FilterType(row.parsed::<TypeFilter>()?),
            "toggle_balances" => Event::ToggleBalances,
            "toggle_card_details" => Event::ToggleCardDetails,
            "block" => Event::ToggleBlocked(row.id()?),
            "limit" => Event::SetSpendingLimit {
                card: row.id()?,
                limit: row.value(),
            },
            "read" => Event::MarkRead(row.id()?),
            "read_all" => Event::MarkAllRead,
            "transfer_kind" => Event::SelectTransfer(row.parsed::<TransferKind>()?),
            "transfer_from" => Event::TransferFrom(row.id()?),
            "transfer_to" => Event::TransferTo(row.value()),
            "transfer_amount" => Event::TransferAmount(row.value()),
            "transfer_memo" => Event::TransferMemo(row.value()),
            "transfer_submit" => Event::SubmitTransfer,
            other => {
                return Err(Error::Ingestion(format!("Invalid action: {}", other)));
            }
        };

        Ok(event)
    }
}

impl<R: Read + Send + 'static> EventStream for CsvReader<R> {
    type Events = Pin<Box<dyn Stream<Item = Result<Event, Error>> + Send>>;

    fn stream(&mut self) -> Self::Events {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Event, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Event::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
