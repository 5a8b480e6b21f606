#![allow(clippy::unwrap_used)]

use chrono::{FixedOffset, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::listing::*;
use crate::models::{Category, Expense, NewExpense};

fn expense(name: &str, amount: Decimal, category: Category, day: u32, hour: u32) -> Expense {
    Expense::from_new(
        NewExpense::new(name, amount, category),
        Utc.with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap(),
    )
}

fn sample() -> Vec<Expense> {
    vec![
        expense("Coffee", dec!(150), Category::Food, 3, 6),
        expense("rent", dec!(9000), Category::HomeRent, 1, 6),
        expense("Books", dec!(300), Category::Studies, 5, 6),
        expense("Bus pass", dec!(45.5), Category::Miscellaneous, 3, 20),
    ]
}

fn names(rows: &[Expense]) -> Vec<&str> {
    rows.iter().map(|e| e.name.as_str()).collect()
}

// ── Search ────────────────────────────────────────────────────

#[test]
fn test_empty_search_matches_all() {
    let rows = TransactionQuery::default().apply(&sample(), &Utc);
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_search_by_name_case_insensitive() {
    let query = TransactionQuery {
        search: "COFF".into(),
        ..TransactionQuery::default()
    };
    assert_eq!(names(&query.apply(&sample(), &Utc)), vec!["Coffee"]);
}

#[test]
fn test_search_matching_only_category() {
    let query = TransactionQuery {
        search: "studies".into(),
        ..TransactionQuery::default()
    };
    let rows = query.apply(&sample(), &Utc);
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|e| e.category == Category::Studies));
}

#[test]
fn test_search_by_amount_text() {
    let query = TransactionQuery {
        search: "45.5".into(),
        ..TransactionQuery::default()
    };
    assert_eq!(names(&query.apply(&sample(), &Utc)), vec!["Bus pass"]);

    let query = TransactionQuery {
        search: "900".into(),
        ..TransactionQuery::default()
    };
    assert_eq!(names(&query.apply(&sample(), &Utc)), vec!["rent"]);
}

#[test]
fn test_search_matches_any_field() {
    // "oo" is in the name "Books" and the category "Food"
    let query = TransactionQuery {
        search: "oo".into(),
        ..TransactionQuery::default()
    };
    let rows = query.apply(&sample(), &Utc);
    let mut found = names(&rows);
    found.sort();
    assert_eq!(found, vec!["Books", "Coffee"]);
}

#[test]
fn test_search_without_match() {
    let query = TransactionQuery {
        search: "zzz".into(),
        ..TransactionQuery::default()
    };
    assert!(query.apply(&sample(), &Utc).is_empty());
}

// ── Date filter ───────────────────────────────────────────────

#[test]
fn test_date_filter_by_day() {
    let query = TransactionQuery {
        date_filter: Some("2026-10-03".into()),
        ..TransactionQuery::default()
    };
    let rows = query.apply(&sample(), &Utc);
    let mut found = names(&rows);
    found.sort();
    assert_eq!(found, vec!["Bus pass", "Coffee"]);
}

#[test]
fn test_date_filter_by_month_prefix() {
    let query = TransactionQuery {
        date_filter: Some("2026-10".into()),
        ..TransactionQuery::default()
    };
    assert_eq!(query.apply(&sample(), &Utc).len(), 4);
}

#[test]
fn test_date_filter_uses_viewer_timezone() {
    // 20:00 UTC on the 3rd is already the 4th at +05:30
    let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let query = TransactionQuery {
        date_filter: Some("2026-10-04".into()),
        ..TransactionQuery::default()
    };
    assert_eq!(names(&query.apply(&sample(), &ist)), vec!["Bus pass"]);
}

#[test]
fn test_date_filter_combines_with_search() {
    let query = TransactionQuery {
        search: "bus".into(),
        date_filter: Some("2026-10-01".into()),
        ..TransactionQuery::default()
    };
    assert!(query.apply(&sample(), &Utc).is_empty());
}

// ── Sorting ───────────────────────────────────────────────────

#[test]
fn test_default_sort_is_date_descending() {
    let rows = TransactionQuery::default().apply(&sample(), &Utc);
    assert_eq!(names(&rows), vec!["Books", "Bus pass", "Coffee", "rent"]);
}

#[test]
fn test_toggle_same_field_flips_direction() {
    let mut query = TransactionQuery::default();
    query.toggle_sort(SortField::Date);
    assert_eq!(query.direction, SortDirection::Asc);
    let rows = query.apply(&sample(), &Utc);
    assert_eq!(names(&rows), vec!["rent", "Coffee", "Bus pass", "Books"]);
}

#[test]
fn test_toggle_new_field_starts_ascending() {
    let mut query = TransactionQuery::default();
    query.toggle_sort(SortField::Amount);
    assert_eq!(query.sort, SortField::Amount);
    assert_eq!(query.direction, SortDirection::Asc);
    let amounts: Vec<Decimal> = query.apply(&sample(), &Utc).iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![dec!(45.5), dec!(150), dec!(300), dec!(9000)]);

    query.toggle_sort(SortField::Amount);
    assert_eq!(query.direction, SortDirection::Desc);
    query.toggle_sort(SortField::Name);
    assert_eq!(query.direction, SortDirection::Asc);
}

#[test]
fn test_sort_by_name_ignores_case() {
    let mut query = TransactionQuery::default();
    query.toggle_sort(SortField::Name);
    let rows = query.apply(&sample(), &Utc);
    assert_eq!(names(&rows), vec!["Books", "Bus pass", "Coffee", "rent"]);
}

#[test]
fn test_sort_by_category_label() {
    let mut query = TransactionQuery::default();
    query.toggle_sort(SortField::Category);
    let cats: Vec<Category> = query.apply(&sample(), &Utc).iter().map(|e| e.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Food,
            Category::HomeRent,
            Category::Miscellaneous,
            Category::Studies
        ]
    );
}

#[test]
fn test_sort_ties_keep_insertion_order() {
    let records = vec![
        expense("b", dec!(1), Category::Food, 2, 6),
        expense("a", dec!(1), Category::Food, 2, 6),
    ];
    let mut query = TransactionQuery::default();
    query.toggle_sort(SortField::Amount);
    assert_eq!(names(&query.apply(&records, &Utc)), vec!["b", "a"]);
    query.toggle_sort(SortField::Amount);
    assert_eq!(names(&query.apply(&records, &Utc)), vec!["b", "a"]);
}

#[test]
fn test_sort_field_parse_and_cycle() {
    assert_eq!(SortField::parse("AMOUNT"), Some(SortField::Amount));
    assert_eq!(SortField::parse("size"), None);
    let mut field = SortField::Date;
    for _ in 0..SortField::all().len() {
        field = field.next();
    }
    assert_eq!(field, SortField::Date);
}
