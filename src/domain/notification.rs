use tracing::debug;

use crate::domain::Error;

pub type NotificationId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Transaction,
    Security,
    Card,
    Reminder,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Transaction => "transaction",
            NotificationKind::Security => "security",
            NotificationKind::Card => "card",
            NotificationKind::Reminder => "reminder",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub time: String, // relative label, e.g. "2 minutes ago"
    is_read: bool,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        title: &str,
        message: &str,
        kind: NotificationKind,
        time: &str,
        is_read: bool,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
            kind,
            time: time.to_string(),
            is_read,
        }
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }
}

/// Read/unread bookkeeping. There is no way back from read to unread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Returns whether the notification changed state.
    pub fn mark_read(&mut self, id: NotificationId) -> Result<bool, Error> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NotFound {
                entity: "notification",
                id,
            })?;

        let changed = !item.is_read;
        item.is_read = true;
        debug!(notification = id, changed, "marked read");
        Ok(changed)
    }

    /// Returns how many notifications went from unread to read.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|n| !n.is_read) {
            item.is_read = true;
            changed += 1;
        }
        debug!(changed, "marked all read");
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Header badge text, absent when everything is read.
    pub fn badge(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n => Some(format!("{} new", n)),
        }
    }
}
