pub const BALANCE_MASK: &str = "••••••";
pub const CVV_MASK: &str = "***";

/// Whether a group of sensitive fields is shown in clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    revealed: bool,
}

impl Visibility {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn hidden() -> Self {
        Self { revealed: false }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Picks what a renderer may show: the real value, or `mask` while hidden.
    pub fn resolve<'a>(&self, value: &'a str, mask: &'a str) -> &'a str {
        if self.revealed { value } else { mask }
    }
}
