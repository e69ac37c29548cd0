//! Ledger Transaction Use Cases

mod create_transaction;
mod delete_transaction;
mod get_transaction_by_id;
mod get_transaction_summary;
mod list_transactions;

use std::sync::Arc;

pub use create_transaction::CreateTransactionUseCase;
pub use delete_transaction::DeleteTransactionUseCase;
pub use get_transaction_by_id::GetTransactionByIdUseCase;
pub use get_transaction_summary::GetTransactionSummaryUseCase;
pub use list_transactions::ListTransactionsUseCase;

use crate::domain::gateways::TransactionRepository;

pub struct TransactionUseCases {
    pub create: CreateTransactionUseCase,
    pub list: ListTransactionsUseCase,
    pub get: GetTransactionByIdUseCase,
    pub summary: GetTransactionSummaryUseCase,
    pub delete: DeleteTransactionUseCase,
}

impl TransactionUseCases {
    #[must_use]
    pub fn new(transactions: &Arc<dyn TransactionRepository>) -> Self {
        Self {
            create: CreateTransactionUseCase::new(transactions.clone()),
            list: ListTransactionsUseCase::new(transactions.clone()),
            get: GetTransactionByIdUseCase::new(transactions.clone()),
            summary: GetTransactionSummaryUseCase::new(transactions.clone()),
            delete: DeleteTransactionUseCase::new(transactions.clone()),
        }
    }
}
