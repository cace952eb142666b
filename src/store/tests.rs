use super::{
    group_by_date, totals, DateWindowPolicy, FilterComposition, IdGenerator, MonotonicIds, StoreError, Totals,
    TransactionFilter, TransactionStore, UuidIds
};
use crate::models::{Context, Transaction};
use crate::storage::{JsonPersistence, MemoryStorage, PersistenceAdapter, SlotStorage, StorageError};
use crate::types::TransactionId;
use crate::validation::{CandidateRecord, ValidationError, ValidationProfile};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cell::Cell;
use std::collections::HashSet;
use std::str::FromStr;

struct SequentialIds(u64);

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TransactionId {
        self.0 += 1;
        TransactionId::new(format!("tx-{}", self.0))
    }
}

struct ConstantIds;

impl IdGenerator for ConstantIds {
    fn next_id(&mut self) -> TransactionId {
        TransactionId::new("same")
    }
}

#[derive(Default)]
struct CountingPersistence {
    saves: Cell<usize>,
    fail_writes: bool
}

impl PersistenceAdapter for CountingPersistence {
    fn get(&self) -> Result<Vec<Transaction>, StorageError> {
        Ok(Vec::new())
    }

    fn save(&self, _transactions: &[Transaction]) -> Result<(), StorageError> {
        self.saves.set(self.saves.get() + 1);

        if self.fail_writes {
            return Err(StorageError::QuotaExceeded { key: "transactions".to_string(), size: 1, quota: 0 });
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::InvalidKey { key: "transactions".to_string() });
        }

        Ok(())
    }
}

fn date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::from_str(value)?)
}

fn memory_store() -> TransactionStore<JsonPersistence<MemoryStorage>, SequentialIds> {
    TransactionStore::with_id_generator(JsonPersistence::new(MemoryStorage::new(), "transactions"), SequentialIds(0))
}

fn entry(description: &str, amount: &str, date: &str, transaction_type: &str, context: &str) -> CandidateRecord {
    CandidateRecord::new(description, amount, date, transaction_type, context)
}

fn seeded_store() -> Result<TransactionStore<JsonPersistence<MemoryStorage>, SequentialIds>> {
    let mut store = memory_store();
    store.add(&entry("Books", "30", "2024-01-01", "expense", "personal"))?;
    store.add(&entry("Furniture", "200", "2024-02-01", "expense", "home"))?;
    store.add(&entry("Paycheck", "1000", "2024-03-01", "income", "salary"))?;
    Ok(store)
}

fn dates(transactions: &[&Transaction]) -> Vec<String> {
    transactions.iter().map(|transaction| transaction.date().to_string()).collect()
}

#[test]
fn test_add_appends_and_persists_full_collection() -> Result<()> {
    let mut store = memory_store();
    let transaction = store.add(&entry("Salary March", "5000", "2024-03-31", "income", "salary"))?;

    assert_eq!(transaction.id().as_str(), "tx-1");
    assert_eq!(store.len(), 1);

    let persisted = store.persistence().get()?;

    assert_eq!(persisted, vec![transaction]);

    Ok(())
}

#[test]
fn test_add_rejects_invalid_candidate_without_mutation() -> Result<()> {
    let mut store = seeded_store()?;
    let result = store.add(&entry("", "10", "2024-01-01", "income", "home"));

    assert!(matches!(result, Err(StoreError::Validation(ValidationError::MissingFields { .. }))));
    assert_eq!(store.len(), 3);
    assert_eq!(store.persistence().get()?.len(), 3);

    Ok(())
}

#[test]
fn test_store_rehydrates_from_persistence() -> Result<()> {
    let slots = MemoryStorage::new();

    {
        let mut store = TransactionStore::new(JsonPersistence::new(slots.clone(), "transactions"));
        store.add(&entry("Electricity", "75.20", "2024-05-02", "expense", "home"))?;
    }

    let store = TransactionStore::new(JsonPersistence::new(slots, "transactions"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.transactions()[0].description(), "Electricity");

    Ok(())
}

#[test]
fn test_rehydration_keeps_high_precision_and_maximum_amounts() -> Result<()> {
    let slots = MemoryStorage::new();

    {
        let mut store = TransactionStore::new(JsonPersistence::new(slots.clone(), "transactions"));
        store.add(&entry("Keep me", "50", "2024-05-01", "income", "salary"))?;
        store.add(&entry("Bond coupon", "1234567890.123456789", "2024-05-02", "income", "personal"))?;
        store.add(&entry("Everything", "79228162514264337593543950335", "2024-05-03", "expense", "home"))?;
    }

    let store = TransactionStore::new(JsonPersistence::new(slots, "transactions"));
    let amounts: Vec<String> = store.transactions().iter()
        .map(|transaction| transaction.amount().to_string())
        .collect();

    assert_eq!(amounts, vec!["50", "1234567890.123456789", "79228162514264337593543950335"]);

    Ok(())
}

#[test]
fn test_corrupted_persistence_degrades_to_empty_store() -> Result<()> {
    let slots = MemoryStorage::new();
    slots.write("transactions", "{ not json")?;

    let store = TransactionStore::new(JsonPersistence::new(slots, "transactions"));

    assert!(store.is_empty());

    Ok(())
}

#[test]
fn test_rehydration_drops_duplicate_ids() -> Result<()> {
    let slots = MemoryStorage::new();
    let record = r#"{"id":"1","description":"Tea","amount":2,"date":"2024-01-01","type":"expense","context":"personal","createdAt":"2024-01-01T00:00:00Z"}"#;
    slots.write("transactions", &format!("[{record},{record}]"))?;

    let store = TransactionStore::new(JsonPersistence::new(slots, "transactions"));

    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_delete_removes_matching_id_and_ignores_unknown_ids() -> Result<()> {
    let mut store = seeded_store()?;

    assert_eq!(store.delete(&TransactionId::from("tx-2"))?, 1);
    assert_eq!(store.delete(&TransactionId::from("missing"))?, 0);
    assert_eq!(store.len(), 2);
    assert!(store.get(&TransactionId::from("tx-2")).is_none());
    assert_eq!(store.persistence().get()?.len(), 2);

    Ok(())
}

#[test]
fn test_storage_failure_propagates_but_keeps_in_memory_change() -> Result<()> {
    let persistence = CountingPersistence { fail_writes: true, ..CountingPersistence::default() };
    let mut store = TransactionStore::with_id_generator(persistence, SequentialIds(0));

    let result = store.add(&entry("Groceries", "45", "2024-01-05", "expense", "home"));

    assert!(matches!(result, Err(StoreError::Storage(StorageError::QuotaExceeded { .. }))));
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_every_mutation_reports_storage_failures_as_store_errors() -> Result<()> {
    let persistence = CountingPersistence { fail_writes: true, ..CountingPersistence::default() };
    let mut store = TransactionStore::with_id_generator(persistence, SequentialIds(0));
    let _ = store.add(&entry("Rent", "900", "2024-01-01", "expense", "home"));
    let _ = store.add(&entry("Gym", "40", "2024-01-02", "expense", "personal"));

    let deleted = store.delete(&TransactionId::from("tx-1"));

    assert!(matches!(deleted, Err(StoreError::Storage(StorageError::QuotaExceeded { .. }))));
    assert_eq!(store.len(), 1);

    let cleared = store.clear();

    assert!(matches!(cleared, Err(StoreError::Storage(StorageError::InvalidKey { .. }))));
    assert!(store.is_empty());

    Ok(())
}

#[test]
fn test_append_batch_persists_once() -> Result<()> {
    let mut store = TransactionStore::with_id_generator(CountingPersistence::default(), SequentialIds(0));
    let records = (1..=4)
        .map(|day| ValidationProfile::Import.validate(&entry("Snack", "3", &format!("2024-01-0{day}"), "expense", "personal")))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(store.append_batch(records)?, 4);
    assert_eq!(store.len(), 4);
    assert_eq!(store.persistence().saves.get(), 1);

    Ok(())
}

#[test]
fn test_append_batch_fails_without_mutation_when_ids_run_out() -> Result<()> {
    let mut store = TransactionStore::with_id_generator(CountingPersistence::default(), ConstantIds);
    store.add(&entry("First", "1", "2024-01-01", "income", "home"))?;

    let records = vec![ValidationProfile::Import.validate(&entry("Second", "2", "2024-01-02", "income", "home"))?];

    assert!(matches!(store.append_batch(records), Err(StoreError::IdsExhausted { .. })));
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_clear_empties_store_and_persistence() -> Result<()> {
    let mut store = seeded_store()?;
    store.clear()?;

    assert!(store.is_empty());
    assert!(store.persistence().slots().is_empty());

    Ok(())
}

#[test]
fn test_filter_by_date_window_is_inclusive() -> Result<()> {
    let store = seeded_store()?;

    let filter = TransactionFilter::between(date("2024-01-15")?, date("2024-02-15")?);
    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-02-01"]);

    let filter = TransactionFilter::between(date("2024-01-01")?, date("2024-02-01")?);
    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-01-01", "2024-02-01"]);

    Ok(())
}

#[test]
fn test_filter_by_context_set() -> Result<()> {
    let store = seeded_store()?;

    let filter = TransactionFilter::new().with_contexts([Context::Salary]);
    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-03-01"]);

    let filter = TransactionFilter::new().with_contexts([Context::Home, Context::Personal]);
    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-01-01", "2024-02-01"]);

    Ok(())
}

#[test]
fn test_empty_filter_is_idempotent_and_keeps_store_order() -> Result<()> {
    let store = seeded_store()?;
    let first = store.filtered(&TransactionFilter::default());
    let second = store.filtered(&TransactionFilter::default());

    assert_eq!(first, second);
    assert_eq!(dates(&first), vec!["2024-01-01", "2024-02-01", "2024-03-01"]);

    Ok(())
}

#[test]
fn test_date_then_context_excludes_dates_outside_window() -> Result<()> {
    let store = seeded_store()?;
    let filter = TransactionFilter::between(date("2024-01-15")?, date("2024-02-15")?)
        .with_contexts([Context::Salary, Context::Home]);

    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-02-01"]);

    Ok(())
}

#[test]
fn test_context_overrides_date_ignores_window_when_contexts_given() -> Result<()> {
    let store = seeded_store()?;
    let filter = TransactionFilter::between(date("2024-01-15")?, date("2024-02-15")?)
        .with_contexts([Context::Salary, Context::Home])
        .with_composition(FilterComposition::ContextOverridesDate);

    assert_eq!(dates(&store.filtered(&filter)), vec!["2024-02-01", "2024-03-01"]);

    let without_contexts = TransactionFilter::between(date("2024-01-15")?, date("2024-02-15")?)
        .with_composition(FilterComposition::ContextOverridesDate);

    assert_eq!(dates(&store.filtered(&without_contexts)), vec!["2024-02-01"]);

    Ok(())
}

#[test]
fn test_lone_date_bound_depends_on_window_policy() -> Result<()> {
    let store = seeded_store()?;
    let start_only = TransactionFilter::new().with_start_date(date("2024-02-01")?);

    assert_eq!(store.filtered(&start_only).len(), 3);

    let open_start = start_only.with_date_window(DateWindowPolicy::AllowOpenEnded);
    assert_eq!(dates(&store.filtered(&open_start)), vec!["2024-02-01", "2024-03-01"]);

    let open_end = TransactionFilter::new()
        .with_end_date(date("2024-01-31")?)
        .with_date_window(DateWindowPolicy::AllowOpenEnded);
    assert_eq!(dates(&store.filtered(&open_end)), vec!["2024-01-01"]);

    Ok(())
}

#[test]
fn test_inverted_date_range_is_reported_and_matches_nothing() -> Result<()> {
    let store = seeded_store()?;
    let filter = TransactionFilter::between(date("2024-03-01")?, date("2024-01-01")?);

    assert!(!filter.has_valid_date_range());
    assert!(store.filtered(&filter).is_empty());
    assert!(TransactionFilter::new().with_end_date(date("2024-01-01")?).has_valid_date_range());

    Ok(())
}

#[test]
fn test_totals_sum_income_and_expenses_separately() -> Result<()> {
    let mut store = memory_store();
    store.add(&entry("Salary", "100", "2024-01-01", "income", "salary"))?;
    store.add(&entry("Dinner", "40", "2024-01-02", "expense", "personal"))?;
    store.add(&entry("Cashback", "20", "2024-01-03", "income", "personal"))?;

    let summary = totals(store.transactions());

    assert_eq!(summary, Totals { income: Decimal::from(120), expenses: Decimal::from(40) });
    assert_eq!(summary.net_savings(), Decimal::from(80));

    let filtered = store.filtered(&TransactionFilter::new().with_contexts([Context::Personal]));
    let personal = Totals::from_transactions(filtered);

    assert_eq!(personal.net_savings(), Decimal::from(-20));

    Ok(())
}

#[test]
fn test_totals_of_nothing_are_zero() {
    let summary = Totals::from_transactions(std::iter::empty());

    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(summary.net_savings(), Decimal::ZERO);
}

#[test]
fn test_group_by_date_orders_dates_and_keeps_insertion_order() -> Result<()> {
    let mut store = memory_store();
    store.add(&entry("Lunch", "12", "2024-02-10", "expense", "personal"))?;
    store.add(&entry("Rent", "900", "2024-02-01", "expense", "home"))?;
    store.add(&entry("Coffee", "3", "2024-02-10", "expense", "personal"))?;

    let groups = group_by_date(store.transactions());
    let keys: Vec<String> = groups.keys().map(|key| key.to_string()).collect();

    assert_eq!(keys, vec!["2024-02-01", "2024-02-10"]);

    let same_day = groups.get(&date("2024-02-10")?).ok_or_else(|| anyhow!("missing group"))?;
    let descriptions: Vec<&str> = same_day.iter().map(|transaction| transaction.description()).collect();

    assert_eq!(descriptions, vec!["Lunch", "Coffee"]);

    Ok(())
}

#[test]
fn test_monotonic_ids_are_unique_within_one_clock_tick() {
    let mut generator = MonotonicIds::new();
    let ids: HashSet<TransactionId> = (0..1_000).map(|_| generator.next_id()).collect();

    assert_eq!(ids.len(), 1_000);
}

#[test]
fn test_monotonic_ids_start_after_seed() {
    let mut generator = MonotonicIds::starting_after(u64::MAX - 1);

    assert_eq!(generator.next_id().as_str(), u64::MAX.to_string());
}

#[test]
fn test_uuid_ids_are_unique() {
    let mut generator = UuidIds;

    assert_ne!(generator.next_id(), generator.next_id());
}
