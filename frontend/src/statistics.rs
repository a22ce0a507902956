//! Period filtering and per-category aggregation behind the statistics screen.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::chart::{project_chart, ChartData, FALLBACK_COLOR};
use crate::model::{Category, Period, Transaction, TransactionType};

pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const OTHER_EXPENSES: &str = "Other expenses";

/// Expense sums keyed by category name, in the order each name was first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryExpenses {
    entries: Vec<(String, Decimal)>,
}

impl CategoryExpenses {
    pub fn add(&mut self, name: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, sum)) => *sum = sum.saturating_add(amount),
            None => self.entries.push((name.to_string(), amount)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, sum)| *sum)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(key, sum)| (key.as_str(), *sum))
    }

    /// Sum of every bucket, pinned at `Decimal::MAX` instead of overflowing.
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, (_, sum)| acc.saturating_add(*sum))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateResult {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub category_expenses: CategoryExpenses,
    pub chart_data: ChartData,
}

impl AggregateResult {
    /// Slice colour for a category name, gray when the name has no slice.
    pub fn color_for(&self, category_name: &str) -> &str {
        self.category_expenses
            .position(category_name)
            .and_then(|idx| self.chart_data.color_at(idx))
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// Name of the first category whose id matches, `"Unknown"` otherwise.
pub fn category_name(category_id: Option<&str>, categories: Option<&[Category]>) -> String {
    let (Some(categories), Some(category_id)) = (categories, category_id) else {
        return UNKNOWN_CATEGORY.to_string();
    };
    if category_id.is_empty() {
        return UNKNOWN_CATEGORY.to_string();
    }
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

/// Transactions dated inside `period`. Undated or malformed entries never match.
pub fn filter_by_period(transactions: &[Transaction], period: &Period) -> Vec<Transaction> {
    if transactions.is_empty() || period.resolve().is_none() {
        return Vec::new();
    }
    transactions
        .iter()
        .filter(|tx| tx.date().map_or(false, |date| period.contains(date)))
        .cloned()
        .collect()
}

pub fn expense_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.is_expense())
        .cloned()
        .collect()
}

/// Placeholder shown instead of the table when the period has no expenses.
pub fn empty_message(period: &Period, expenses: &[Transaction]) -> Option<String> {
    if !expenses.is_empty() {
        return None;
    }
    Some(format!("No expenses found for {} {}", period.month, period.year))
}

/// Totals saturate at the `Decimal` range rather than panicking.
pub fn aggregate_transactions(
    transactions: &[Transaction],
    categories: Option<&[Category]>,
) -> AggregateResult {
    let mut lookup: HashMap<&str, &str> = HashMap::new();
    for category in categories.unwrap_or_default() {
        lookup.insert(category.id.as_str(), category.name.as_str());
    }

    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut category_expenses = CategoryExpenses::default();

    for tx in transactions {
        match tx.kind {
            TransactionType::Income => total_income = total_income.saturating_add(tx.amount.abs()),
            TransactionType::Expense => {
                let amount = tx.amount.abs();
                total_expense = total_expense.saturating_add(amount);
                let name = tx
                    .category_id
                    .as_deref()
                    .and_then(|id| lookup.get(id).copied())
                    .filter(|name| !name.is_empty())
                    .unwrap_or(OTHER_EXPENSES);
                category_expenses.add(name, amount);
            }
            TransactionType::Other => {}
        }
    }

    let chart_data = project_chart(&category_expenses);
    AggregateResult {
        total_income,
        total_expense,
        balance: total_income.saturating_sub(total_expense),
        category_expenses,
        chart_data,
    }
}

/// Filter to `period`, then aggregate.
pub fn aggregate(
    transactions: &[Transaction],
    categories: Option<&[Category]>,
    period: &Period,
) -> AggregateResult {
    let filtered = filter_by_period(transactions, period);
    let result = aggregate_transactions(&filtered, categories);
    tracing::debug!(
        month = %period.month,
        year = %period.year,
        matched = filtered.len(),
        slices = result.category_expenses.len(),
        "recomputed period statistics"
    );
    result
}
