pub(crate) mod add_expense;
pub(crate) mod dashboard;
pub(crate) mod transactions;
