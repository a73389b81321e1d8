//! Statement entries
//!
//! A statement is the append-only, chronologically ordered list of credit and
//! debit entries belonging to one customer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Amount, Balance, DomainError};

/// Calendar date format accepted by the date-scoped statement query
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Credit,
    Debit,
}

/// One credit or debit record.
///
/// Fields are private: an entry never changes after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    amount: Amount,
    created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

impl StatementEntry {
    /// Credit entry stamped with the current time
    pub fn credit(description: Option<String>, amount: Amount) -> Self {
        Self::credit_at(description, amount, Utc::now())
    }

    /// Debit entry stamped with the current time
    pub fn debit(amount: Amount) -> Self {
        Self::debit_at(amount, Utc::now())
    }

    pub fn credit_at(description: Option<String>, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            amount,
            created_at,
            entry_type: EntryType::Credit,
        }
    }

    pub fn debit_at(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            description: None,
            amount,
            created_at,
            entry_type: EntryType::Debit,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// UTC calendar day the entry was created on
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Apply this entry to a running balance
    fn apply(&self, balance: Balance) -> Balance {
        match self.entry_type {
            EntryType::Credit => balance.credit(&self.amount),
            EntryType::Debit => balance.debit(&self.amount),
        }
    }
}

/// Ordered sequence of entries; insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Statement(Vec<StatementEntry>);

impl Statement {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: StatementEntry) {
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[StatementEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn balance(&self) -> Balance {
        balance(&self.0)
    }

    /// Entries created on `date`, in statement order
    pub fn on_date(&self, date: NaiveDate) -> Vec<StatementEntry> {
        self.0
            .iter()
            .filter(|entry| entry.created_on() == date)
            .cloned()
            .collect()
    }
}

impl FromIterator<StatementEntry> for Statement {
    fn from_iter<I: IntoIterator<Item = StatementEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fold a sequence of entries into a balance: credits add, debits subtract.
pub fn balance<'a, I>(entries: I) -> Balance
where
    I: IntoIterator<Item = &'a StatementEntry>,
{
    entries
        .into_iter()
        .fold(Balance::zero(), |acc, entry| entry.apply(acc))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(input.to_string()))
}
