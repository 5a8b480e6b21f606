/// A logical screen address such as `/transactions?date=2026-10-03`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Dashboard,
    AddExpense,
    Transactions { date: Option<String> },
}

impl Route {
    /// Unknown paths fall back to the dashboard.
    pub(crate) fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };
        match path.trim_end_matches('/') {
            "" => Self::Dashboard,
            "/add-expense" | "add-expense" => Self::AddExpense,
            "/transactions" | "transactions" => Self::Transactions {
                date: query.and_then(|q| query_param(q, "date")),
            },
            _ => Self::Dashboard,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::AddExpense => "/add-expense".to_string(),
            Self::Transactions { date: Some(date) } => format!("/transactions?date={date}"),
            Self::Transactions { date: None } => "/transactions".to_string(),
        }
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty())
}
