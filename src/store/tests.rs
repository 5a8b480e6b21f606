#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;
use crate::ui::form;

fn empty_store() -> ExpenseStore {
    ExpenseStore::open(Database::open_in_memory().unwrap()).unwrap()
}

fn coffee() -> NewExpense {
    NewExpense::new("Coffee", dec!(150), Category::Food)
}

// ── Loading ───────────────────────────────────────────────────

#[test]
fn test_absent_slot_is_empty() {
    let store = empty_store();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.last_saved().unwrap(), None);
}

#[test]
fn test_malformed_slot_is_empty() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot(EXPENSES_SLOT, "{not json").unwrap();
    let store = ExpenseStore::open(db).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_wrong_shape_slot_is_empty() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot(EXPENSES_SLOT, r#"[{"id":"1","name":"x"}]"#).unwrap();
    let store = ExpenseStore::open(db).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_loads_existing_slot() {
    let db = Database::open_in_memory().unwrap();
    db.write_slot(
        EXPENSES_SLOT,
        r#"[{"id":"a","date":"2026-10-01T08:00:00.000Z","name":"Rent","amount":9000,"category":"Home Rent"}]"#,
    )
    .unwrap();
    let store = ExpenseStore::open(db).unwrap();
    assert_eq!(store.len(), 1);
    let rent = store.get("a").unwrap();
    assert_eq!(rent.category, Category::HomeRent);
    assert_eq!(rent.amount, dec!(9000));
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_appends_one_record() {
    let mut store = empty_store();
    let created = store.add(coffee()).unwrap();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0], created);
    assert_eq!(snapshot[0].name, "Coffee");
    assert_eq!(snapshot[0].amount, dec!(150));
    assert_eq!(snapshot[0].category, Category::Food);
}

#[test]
fn test_add_generates_fresh_ids() {
    let mut store = empty_store();
    let a = store.add(coffee()).unwrap();
    let b = store.add(coffee()).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_add_sets_current_timestamp() {
    let mut store = empty_store();
    let before = Utc::now();
    let created = store.add(coffee()).unwrap();
    let after = Utc::now();
    assert!(created.date >= before && created.date <= after);
}

#[test]
fn test_add_does_not_validate() {
    let mut store = empty_store();
    let odd = NewExpense::new("", dec!(-5), Category::Miscellaneous);
    store.add(odd).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_snapshot_keeps_insertion_order() {
    let mut store = empty_store();
    let late = Utc.with_ymd_and_hms(2026, 10, 10, 0, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    store
        .add_at(NewExpense::new("first", dec!(1), Category::Food), late)
        .unwrap();
    store
        .add_at(NewExpense::new("second", dec!(2), Category::Food), early)
        .unwrap();
    let names: Vec<&str> = store.snapshot().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_add_persists_snapshot() {
    let mut store = empty_store();
    store.add(coffee()).unwrap();
    let raw = store.db.read_slot(EXPENSES_SLOT).unwrap().unwrap();
    let stored = decode(&raw).unwrap();
    assert_eq!(stored, store.snapshot());
    assert!(store.last_saved().unwrap().is_some());
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_delete_removes_record() {
    let mut store = empty_store();
    let keep = store.add(coffee()).unwrap();
    let gone = store
        .add(NewExpense::new("Books", dec!(300), Category::Studies))
        .unwrap();
    assert!(store.delete(&gone.id).unwrap());
    assert!(store.get(&gone.id).is_none());
    assert!(store.snapshot().iter().all(|e| e.id != gone.id));
    assert_eq!(store.snapshot(), &[keep]);
}

#[test]
fn test_delete_unknown_is_noop() {
    let mut store = empty_store();
    store.add(coffee()).unwrap();
    let before = store.snapshot().to_vec();
    assert!(!store.delete("does-not-exist").unwrap());
    assert_eq!(store.snapshot(), before.as_slice());
}

#[test]
fn test_delete_twice_is_idempotent() {
    let mut store = empty_store();
    let created = store.add(coffee()).unwrap();
    assert!(store.delete(&created.id).unwrap());
    assert!(!store.delete(&created.id).unwrap());
    assert!(store.is_empty());
}

#[test]
fn test_delete_persists_snapshot() {
    let mut store = empty_store();
    let created = store.add(coffee()).unwrap();
    store.delete(&created.id).unwrap();
    let raw = store.db.read_slot(EXPENSES_SLOT).unwrap().unwrap();
    assert_eq!(raw, "[]");
}

// ── Round trip ────────────────────────────────────────────────

#[test]
fn test_encode_decode_preserves_order_and_fields() {
    let mut store = empty_store();
    let at = Utc.with_ymd_and_hms(2026, 8, 3, 14, 5, 9).unwrap();
    store
        .add_at(NewExpense::new("Rent", dec!(9000), Category::HomeRent), at)
        .unwrap();
    store
        .add_at(NewExpense::new("Notebook", dec!(12.5), Category::Studies), at)
        .unwrap();
    store
        .add_at(NewExpense::new("Tea", dec!(0.75), Category::Food), at)
        .unwrap();
    let raw = encode(store.snapshot()).unwrap();
    assert_eq!(decode(&raw).unwrap(), store.snapshot());
}

#[test]
fn test_encode_empty_collection() {
    assert_eq!(encode(&[]).unwrap(), "[]");
    assert!(decode("[]").unwrap().is_empty());
}

#[test]
fn test_reopen_restores_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenzor.db");
    let saved = {
        let mut store = ExpenseStore::open(Database::open(&path).unwrap()).unwrap();
        store.add(coffee()).unwrap();
        store
            .add(NewExpense::new("Bus", dec!(40), Category::Miscellaneous))
            .unwrap();
        store.snapshot().to_vec()
    };
    let store = ExpenseStore::open(Database::open(&path).unwrap()).unwrap();
    assert_eq!(store.snapshot(), saved.as_slice());
    let total: Decimal = store.snapshot().iter().map(|e| e.amount).sum();
    assert_eq!(total, dec!(190));
}

#[test]
fn test_validated_amounts_survive_encode_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenzor.db");
    let amounts = ["9999999999999.99", "0.01", "1234567.89", "12.5", "1e3"];
    let saved = {
        let mut store = ExpenseStore::open(Database::open(&path).unwrap()).unwrap();
        for amount in amounts {
            store.add(form::validate("Item", amount, "Food").unwrap()).unwrap();
        }
        let raw = encode(store.snapshot()).unwrap();
        assert_eq!(decode(&raw).unwrap(), store.snapshot());
        store.snapshot().to_vec()
    };
    let store = ExpenseStore::open(Database::open(&path).unwrap()).unwrap();
    assert_eq!(store.snapshot(), saved.as_slice());
    assert_eq!(store.snapshot()[0].amount, dec!(9999999999999.99));
}
