use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Expense categories. The lower-case key is canonical: it is what the
/// server sends and expects, and what `<select>` options carry. The
/// capitalized label exists only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Entertainment,
        Category::Other,
    ];

    /// Wire key, lower-case.
    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Accepts either casing ("food", "Food") and normalizes to the key.
    pub fn parse(raw: &str) -> Option<Category> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transportation" => Some(Category::Transportation),
            "housing" => Some(Category::Housing),
            "entertainment" => Some(Category::Entertainment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

/// A single recorded spending item, owned by the server. The client holds
/// a transient, display-only copy per page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

/// Create payload: everything but the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

/// Partial-update payload. Only fields that actually changed are set;
/// unset fields are left out of the request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

pub fn parse_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::validation("Name is required."));
    }
    Ok(name.to_string())
}

pub fn parse_amount(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::validation("Amount is required."));
    }
    let amount: f64 = raw
        .parse()
        .map_err(|_| Error::validation("Amount must be a number."))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::validation("Amount must be zero or more."));
    }
    Ok(amount)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::validation("Date is required."));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::validation("Date must be a valid calendar date."))
}

/// Display-only row filter: case-insensitive substring match on the name
/// plus an optional exact category. Never touches the underlying set.
pub fn matches_filters(expense: &Expense, search: &str, category: Option<Category>) -> bool {
    if let Some(category) = category {
        if expense.category != category {
            return false;
        }
    }
    let search = search.trim().to_lowercase();
    search.is_empty() || expense.name.to_lowercase().contains(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(name: &str, category: Category) -> Expense {
        Expense {
            id: 1,
            name: name.to_string(),
            amount: 10.0,
            category,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn category_round_trips_lowercase_keys() {
        for category in Category::ALL {
            let wire = serde_json::to_string(&category).unwrap();
            assert_eq!(wire, format!("\"{}\"", category.key()));
            let back: Category = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn category_parse_accepts_either_casing() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("Food"), Some(Category::Food));
        assert_eq!(Category::parse(" HOUSING "), Some(Category::Housing));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn category_labels_are_capitalized() {
        for category in Category::ALL {
            let label = category.label();
            assert!(label.chars().next().unwrap().is_ascii_uppercase());
            assert_eq!(label.to_ascii_lowercase(), category.key());
        }
    }

    #[test]
    fn expense_deserializes_from_server_shape() {
        let raw = r#"{"id":7,"name":"Groceries","amount":52.25,"category":"food","date":"2026-03-14"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount, 52.25);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ExpensePatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }

    #[test]
    fn amount_only_patch_serializes_only_amount() {
        let patch = ExpensePatch {
            amount: Some(19.5),
            ..ExpensePatch::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"amount":19.5}"#);
    }

    #[test]
    fn parse_amount_rejects_negative_and_garbage() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" 0 ").unwrap(), 0.0);
        assert!(matches!(parse_amount(""), Err(Error::Validation(_))));
        assert!(matches!(parse_amount("-3"), Err(Error::Validation(_))));
        assert!(matches!(parse_amount("abc"), Err(Error::Validation(_))));
    }

    #[test]
    fn parse_date_requires_iso_calendar_dates() {
        assert!(parse_date("2026-02-28").is_ok());
        assert!(matches!(parse_date("2026-02-30"), Err(Error::Validation(_))));
        assert!(matches!(parse_date("03/14/2026"), Err(Error::Validation(_))));
        assert!(matches!(parse_date(""), Err(Error::Validation(_))));
    }

    #[test]
    fn filters_compose_and_ignore_case() {
        let rent = expense("Monthly Rent", Category::Housing);
        assert!(matches_filters(&rent, "", None));
        assert!(matches_filters(&rent, "rent", None));
        assert!(matches_filters(&rent, "RENT", Some(Category::Housing)));
        assert!(!matches_filters(&rent, "rent", Some(Category::Food)));
        assert!(!matches_filters(&rent, "bus", None));
    }
}
