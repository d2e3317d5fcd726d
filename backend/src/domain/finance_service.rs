//! Finance ledger: an append-only, most-recent-first list of income and
//! expense entries. Totals are always derived, never stored.

use super::generate_id;
use super::validation::{validate_amount, validate_description, ValidationError};
use crate::clock::Clock;
use crate::config::PlannerConfig;
use crate::storage::{self, KeyValueStore};
use log::{debug, error, info};
use shared::{FinanceSummary, Transaction, TransactionKind};
use std::rc::Rc;

/// Income total, expense total and their difference
pub fn summarize(transactions: &[Transaction]) -> FinanceSummary {
    let (income, expense) = transactions.iter().fold((0.0, 0.0), |(income, expense), tx| {
        match tx.kind {
            TransactionKind::Income => (income + tx.amount, expense),
            TransactionKind::Expense => (income, expense + tx.amount),
        }
    });
    FinanceSummary { income, expense, balance: income - expense }
}

pub struct FinanceService {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    storage_key: String,
    transactions: Vec<Transaction>,
    summary: FinanceSummary,
}

impl FinanceService {
    pub fn load(store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>, config: &PlannerConfig) -> Self {
        let storage_key = config.storage_keys.finance.clone();
        let transactions: Vec<Transaction> = storage::load_or_default(store.as_ref(), &storage_key);
        let summary = summarize(&transactions);
        Self { store, clock, storage_key, transactions, summary }
    }

    /// Ledger entries, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn summary(&self) -> FinanceSummary {
        self.summary
    }

    /// Record an entry from raw form input.
    ///
    /// The amount must parse to a number strictly above zero and the
    /// description must not be blank.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: &str,
        description: &str,
    ) -> Result<Transaction, ValidationError> {
        let validated = validate_description(description)
            .and_then(|description| validate_amount(amount).map(|amount| (amount, description)));
        let (amount, description) = validated.map_err(|e| {
            debug!("Rejected {} entry: {}", kind, e);
            e
        })?;

        let transaction = Transaction {
            id: generate_id(|candidate| self.transactions.iter().any(|t| t.id == candidate)),
            kind,
            amount,
            description,
            created_at: self.clock.now_millis(),
        };
        info!("💰 Adding {} of {:.2}: {}", kind, amount, transaction.id);
        self.transactions.insert(0, transaction.clone());
        self.summary = summarize(&self.transactions);
        self.persist();

        Ok(transaction)
    }

    fn persist(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), &self.storage_key, &self.transactions) {
            error!("Failed to persist finance entries: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use crate::test_utils::TestEnvironment;

    fn service(env: &TestEnvironment) -> FinanceService {
        FinanceService::load(env.store.clone(), env.clock.clone(), &env.config)
    }

    #[test]
    fn test_salary_then_meal_scenario() {
        let env = TestEnvironment::new();
        let mut finance = service(&env);

        finance.add_transaction(TransactionKind::Income, "50000", "Gaji").unwrap();
        finance.add_transaction(TransactionKind::Expense, "20000", "Makan").unwrap();

        let summary = finance.summary();
        assert_eq!(summary.income, 50000.0);
        assert_eq!(summary.expense, 20000.0);
        assert_eq!(summary.balance, 30000.0);

        assert_eq!(finance.transactions()[0].description, "Makan");
        assert_eq!(finance.transactions()[1].description, "Gaji");
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let env = TestEnvironment::new();
        let mut finance = service(&env);

        assert_eq!(
            finance.add_transaction(TransactionKind::Income, "0", "Nothing"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            finance.add_transaction(TransactionKind::Expense, "-10", "Refund?"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            finance.add_transaction(TransactionKind::Expense, "ten", "Coffee"),
            Err(ValidationError::InvalidAmount("ten".to_string()))
        );
        assert_eq!(
            finance.add_transaction(TransactionKind::Income, "100", "  "),
            Err(ValidationError::EmptyDescription)
        );

        assert!(finance.transactions().is_empty());
        assert_eq!(finance.summary(), FinanceSummary::default());
        assert_eq!(env.store.raw("finance"), None);
    }

    #[test]
    fn test_balance_matches_sums_for_any_sequence() {
        let env = TestEnvironment::new();
        let mut finance = service(&env);

        let entries = [
            (TransactionKind::Income, "12.5"),
            (TransactionKind::Expense, "3.25"),
            (TransactionKind::Expense, "100"),
            (TransactionKind::Income, "0.75"),
            (TransactionKind::Income, "40"),
        ];
        for (kind, amount) in entries {
            finance.add_transaction(kind, amount, "entry").unwrap();

            let income: f64 = finance.transactions().iter()
                .filter(|t| t.kind == TransactionKind::Income)
                .map(|t| t.amount)
                .sum();
            let expense: f64 = finance.transactions().iter()
                .filter(|t| t.kind == TransactionKind::Expense)
                .map(|t| t.amount)
                .sum();
            let summary = finance.summary();
            assert!((summary.income - income).abs() < 1e-9);
            assert!((summary.expense - expense).abs() < 1e-9);
            assert!((summary.balance - (income - expense)).abs() < 1e-9);
        }
        assert!((finance.summary().balance - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_summary_is_recomputed_on_load() {
        let stored = r#"[
            {"id":"b","type":"expense","amount":20000,"desc":"Makan","date":2},
            {"id":"a","type":"income","amount":50000,"desc":"Gaji","date":1}
        ]"#;
        let env = TestEnvironment::with_store(InMemoryStore::new().with_entry("finance", stored));
        let finance = service(&env);

        assert_eq!(finance.transactions().len(), 2);
        assert_eq!(finance.summary().balance, 30000.0);
    }

    #[test]
    fn test_summary_is_not_persisted() {
        let env = TestEnvironment::new();
        let mut finance = service(&env);
        finance.add_transaction(TransactionKind::Income, "5", "Tip").unwrap();

        let raw = env.store.raw("finance").unwrap();
        assert!(!raw.contains("balance"));
        assert!(raw.contains(r#""type":"income""#));
        assert!(raw.contains(r#""desc":"Tip""#));
    }

    #[test]
    fn test_reload_round_trip() {
        let env = TestEnvironment::new();
        let mut finance = service(&env);
        finance.add_transaction(TransactionKind::Income, "1.5", "a").unwrap();
        finance.add_transaction(TransactionKind::Expense, "0.5", "b").unwrap();

        let reloaded = service(&env);
        assert_eq!(reloaded.transactions(), finance.transactions());
        assert_eq!(reloaded.summary(), finance.summary());
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), FinanceSummary { income: 0.0, expense: 0.0, balance: 0.0 });
    }
}
