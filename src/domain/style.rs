//! Colour and icon choices for categories, resolved by exhaustive matches.

use crate::domain::{Category, NotificationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Orange,
    Green,
    Blue,
    Gray,
    Purple,
    Yellow,
    Red,
    Muted,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Orange => "orange",
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Gray => "gray",
            Tone::Purple => "purple",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
            Tone::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Send,
    Shield,
    Card,
    Clock,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Send => "send",
            Icon::Shield => "shield",
            Icon::Card => "card",
            Icon::Clock => "clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub badge: Tone,
    pub icon: Option<Icon>,
}

pub fn category_style(category: Category) -> Style {
    let badge = match category {
        Category::FoodAndDining => Tone::Orange,
        Category::Income => Tone::Green,
        Category::Shopping => Tone::Blue,
        Category::Cash => Tone::Gray,
        Category::Entertainment => Tone::Purple,
        Category::Transportation => Tone::Yellow,
    };
    Style { badge, icon: None }
}

pub fn notification_style(kind: NotificationKind) -> Style {
    let (badge, icon) = match kind {
        NotificationKind::Transaction => (Tone::Blue, Icon::Send),
        NotificationKind::Security => (Tone::Red, Icon::Shield),
        NotificationKind::Card => (Tone::Purple, Icon::Card),
        NotificationKind::Reminder => (Tone::Yellow, Icon::Clock),
    };
    Style {
        badge,
        icon: Some(icon),
    }
}

/// Read notifications keep their badge colour but the icon goes muted.
pub fn notification_icon_tone(kind: NotificationKind, is_read: bool) -> Tone {
    if is_read {
        Tone::Muted
    } else {
        notification_style(kind).badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_badge() {
        let tones: Vec<Tone> = Category::ALL
            .iter()
            .map(|c| category_style(*c).badge)
            .collect();
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn read_notifications_are_muted() {
        assert_eq!(
            notification_icon_tone(NotificationKind::Security, false),
            Tone::Red
        );
        assert_eq!(
            notification_icon_tone(NotificationKind::Security, true),
            Tone::Muted
        );
        assert_eq!(
            notification_style(NotificationKind::Reminder).icon,
            Some(Icon::Clock)
        );
    }
}
