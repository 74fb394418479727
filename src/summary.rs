use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense};

/// Aggregates derived from the current expense set. Rebuilt from scratch
/// whenever the set changes; nothing here is updated incrementally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
    pub by_category: BTreeMap<Category, f64>,
    pub by_month: BTreeMap<String, f64>,
}

impl Summary {
    /// Category with the highest spend, if any.
    pub fn top_category(&self) -> Option<(Category, f64)> {
        self.by_category
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(category, amount)| (*category, *amount))
    }

    pub fn month_total(&self, key: &str) -> f64 {
        self.by_month.get(key).copied().unwrap_or(0.0)
    }
}

pub fn project(expenses: &[Expense]) -> Summary {
    let mut summary = Summary {
        count: expenses.len(),
        ..Summary::default()
    };

    for expense in expenses {
        summary.total += expense.amount;
        *summary.by_category.entry(expense.category).or_insert(0.0) += expense.amount;
        *summary.by_month.entry(month_key(expense.date)).or_insert(0.0) += expense.amount;
    }

    summary
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64, category: Category, date: &str) -> Expense {
        Expense {
            id,
            name: format!("expense {id}"),
            amount,
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn empty_set_projects_to_zero() {
        let summary = project(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_month.is_empty());
        assert_eq!(summary.top_category(), None);
    }

    #[test]
    fn total_is_sum_of_amounts() {
        let expenses = vec![
            expense(1, 10.25, Category::Food, "2026-01-05"),
            expense(2, 4.75, Category::Food, "2026-01-20"),
            expense(3, 800.0, Category::Housing, "2026-02-01"),
        ];
        let summary = project(&expenses);
        assert_eq!(summary.total, 815.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn category_totals_sum_back_to_total() {
        let expenses = vec![
            expense(1, 12.5, Category::Food, "2026-01-05"),
            expense(2, 30.0, Category::Transportation, "2026-01-06"),
            expense(3, 7.25, Category::Food, "2026-01-07"),
            expense(4, 15.0, Category::Entertainment, "2026-02-07"),
        ];
        let summary = project(&expenses);
        assert_eq!(summary.by_category[&Category::Food], 19.75);
        assert_eq!(summary.by_category.values().sum::<f64>(), summary.total);
    }

    #[test]
    fn months_are_keyed_year_month_ascending() {
        let expenses = vec![
            expense(1, 5.0, Category::Other, "2026-03-01"),
            expense(2, 5.0, Category::Other, "2025-12-31"),
            expense(3, 5.0, Category::Other, "2026-01-15"),
            expense(4, 5.0, Category::Other, "2026-01-02"),
        ];
        let summary = project(&expenses);
        let keys: Vec<&str> = summary.by_month.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2025-12", "2026-01", "2026-03"]);
        assert_eq!(summary.month_total("2026-01"), 10.0);
        assert_eq!(summary.month_total("2026-02"), 0.0);
    }

    #[test]
    fn top_category_is_highest_spend() {
        let expenses = vec![
            expense(1, 10.0, Category::Food, "2026-01-05"),
            expense(2, 90.0, Category::Housing, "2026-01-06"),
        ];
        let summary = project(&expenses);
        assert_eq!(summary.top_category(), Some((Category::Housing, 90.0)));
    }
}
