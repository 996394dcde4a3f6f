use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

pub type TransactionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FoodAndDining,
    Income,
    Shopping,
    Cash,
    Entertainment,
    Transportation,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FoodAndDining,
        Category::Income,
        Category::Shopping,
        Category::Cash,
        Category::Entertainment,
        Category::Transportation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Income => "Income",
            Category::Shopping => "Shopping",
            Category::Cash => "Cash",
            Category::Entertainment => "Entertainment",
            Category::Transportation => "Transportation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Decimal, // positive = credit, negative = debit
    pub category: Category,
    pub date: String,
    pub time: String,
}

impl Transaction {
    /// Credit or debit, read off the sign of the amount so the two can never disagree.
    pub fn kind(&self) -> TransactionKind {
        if self.amount < Decimal::ZERO {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionKind),
}

impl TypeFilter {
    pub fn admits(&self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "credit" => Ok(TypeFilter::Only(TransactionKind::Credit)),
            "debit" => Ok(TypeFilter::Only(TransactionKind::Debit)),
            other => Err(Error::InvalidInput(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// Search text plus type filter, as typed into the history screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    needle: String,
    pub kind: TypeFilter,
}

impl TransactionQuery {
    pub fn new(search: &str, kind: TypeFilter) -> Self {
        Self {
            needle: search.to_lowercase(),
            kind,
        }
    }

    pub fn search(&self) -> &str {
        &self.needle
    }

    pub fn set_search(&mut self, search: &str) {
        self.needle = search.to_lowercase();
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let text_ok = self.needle.is_empty()
            || tx.description.to_lowercase().contains(&self.needle)
            || tx.category.label().to_lowercase().contains(&self.needle);

        text_ok && self.kind.admits(tx.kind())
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

/// Transactions matching both `search` and `kind`, in source order.
pub fn filter<'a>(
    transactions: &'a [Transaction],
    search: &str,
    kind: TypeFilter,
) -> Vec<&'a Transaction> {
    TransactionQuery::new(search, kind).apply(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: u32, description: &str, cents: i64, category: Category) -> Transaction {
        Transaction {
            id,
            description: description.to_string(),
            amount: Decimal::new(cents, 2),
            category,
            date: "2025-06-12".to_string(),
            time: "08:30 AM".to_string(),
        }
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            tx(1, "Starbucks Coffee", -450, Category::FoodAndDining),
            tx(2, "Salary Deposit", 320000, Category::Income),
        ]
    }

    fn ids(view: &[&Transaction]) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    #[test]
    fn kind_follows_sign() {
        let all = fixture();
        assert_eq!(all[0].kind(), TransactionKind::Debit);
        assert_eq!(all[1].kind(), TransactionKind::Credit);
        assert_eq!(tx(3, "Zero", 0, Category::Cash).kind(), TransactionKind::Credit);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = fixture();
        assert_eq!(ids(&filter(&all, "starbucks", TypeFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&all, "COFFEE", TypeFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&all, "dep", TypeFilter::All)), vec![2]);
    }

    #[test]
    fn search_hits_category_label() {
        let all = fixture();
        assert_eq!(ids(&filter(&all, "dining", TypeFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&all, "& d", TypeFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&all, "income", TypeFilter::All)), vec![2]);
    }

    #[test]
    fn type_filter_selects_by_kind() {
        let all = fixture();
        let credits = filter(&all, "", TypeFilter::Only(TransactionKind::Credit));
        assert_eq!(ids(&credits), vec![2]);
        let debits = filter(&all, "", TypeFilter::Only(TransactionKind::Debit));
        assert_eq!(ids(&debits), vec![1]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let all = fixture();
        let view = filter(&all, "starbucks", TypeFilter::Only(TransactionKind::Credit));
        assert!(view.is_empty());
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let all = fixture();
        assert!(filter(&all, "mortgage", TypeFilter::All).is_empty());
        assert!(filter(&[], "", TypeFilter::All).is_empty());
    }

    #[test]
    fn parses_type_filter() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            " Credit ".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(TransactionKind::Credit)
        );
        assert!(matches!(
            "refund".parse::<TypeFilter>(),
            Err(Error::InvalidInput(_))
        ));
    }
}
