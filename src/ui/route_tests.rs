use super::route::Route;

#[test]
fn test_root_is_dashboard() {
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse(""), Route::Dashboard);
}

#[test]
fn test_add_expense_route() {
    assert_eq!(Route::parse("/add-expense"), Route::AddExpense);
    assert_eq!(Route::parse("add-expense/"), Route::AddExpense);
}

#[test]
fn test_transactions_without_date() {
    assert_eq!(
        Route::parse("/transactions"),
        Route::Transactions { date: None }
    );
}

#[test]
fn test_transactions_with_date() {
    assert_eq!(
        Route::parse("/transactions?date=2026-10-03"),
        Route::Transactions {
            date: Some("2026-10-03".into())
        }
    );
}

#[test]
fn test_transactions_ignores_other_params() {
    assert_eq!(
        Route::parse("/transactions?sort=name&date=2026-10&x"),
        Route::Transactions {
            date: Some("2026-10".into())
        }
    );
    assert_eq!(
        Route::parse("/transactions?date="),
        Route::Transactions { date: None }
    );
}

#[test]
fn test_unknown_routes_redirect_to_dashboard() {
    assert_eq!(Route::parse("/settings"), Route::Dashboard);
    assert_eq!(Route::parse("/transactions/extra"), Route::Dashboard);
}

#[test]
fn test_path_round_trip() {
    for route in [
        Route::Dashboard,
        Route::AddExpense,
        Route::Transactions { date: None },
        Route::Transactions {
            date: Some("2026-10-03".into()),
        },
    ] {
        assert_eq!(Route::parse(&route.path()), route);
    }
}
