//! Ledger totals and the finance overview.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::overdue::OverdueReport;
use super::rollups::{ScheduleLine, ScheduleSummary};
use crate::domain::models::transaction::{Transaction, TransactionType};

/// Income, expense and balance of a set of ledger entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transactions_count: usize,
}

impl LedgerSummary {
    #[must_use]
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();
        for transaction in transactions {
            summary.transactions_count += 1;
            match transaction.transaction_type() {
                TransactionType::Income => summary.total_income += transaction.amount(),
                TransactionType::Expense => summary.total_expense += transaction.amount(),
            }
        }
        summary.balance = summary.total_income - summary.total_expense;
        summary
    }
}

/// Finance overview: what is owed, what came in, what is late
#[derive(Debug, Clone, Default)]
pub struct FinanceStats {
    pub schedule: ScheduleSummary,
    pub ledger: LedgerSummary,
    pub overdue_amount: Decimal,
    pub overdue_count: usize,
    pub critical_count: usize,
}

impl FinanceStats {
    #[must_use]
    pub fn build(lines: Vec<ScheduleLine>, transactions: &[Transaction], today: NaiveDate) -> Self {
        let schedule = ScheduleSummary::from_installments(lines.iter().map(|l| &l.installment), today);
        let overdue = OverdueReport::build(lines, today);
        Self {
            schedule,
            ledger: LedgerSummary::from_transactions(transactions),
            overdue_amount: overdue.total_remaining,
            overdue_count: overdue.total_count,
            critical_count: overdue.critical_count,
        }
    }
}
