use crate::error::Result;
use crate::models::{
    parse_amount, parse_date, parse_name, Category, Expense, ExpensePatch, NewExpense,
};

/// One editable cell of a row (or of the add form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Amount,
    Category,
    Date,
}

/// Text snapshot of a row's editable fields, taken when the row enters
/// edit mode and kept until save or cancel. Values are exactly what the
/// inputs hold, so nothing is lost while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub amount: String,
    pub category: Category,
    pub date: String,
}

impl Draft {
    /// Blank draft for the add-expense form.
    pub fn empty() -> Self {
        Draft {
            name: String::new(),
            amount: String::new(),
            category: Category::Food,
            date: String::new(),
        }
    }

    /// Snapshot of an existing row. The amount keeps full precision so an
    /// untouched field never diffs against its own rendering.
    pub fn snapshot(expense: &Expense) -> Self {
        Draft {
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
            category: expense.category,
            date: expense.date.to_string(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Amount => self.amount = value,
            Field::Category => {
                if let Some(category) = Category::parse(&value) {
                    self.category = category;
                }
            }
            Field::Date => self.date = value,
        }
    }

    /// Validate every field and build a create payload.
    pub fn to_new_expense(&self) -> Result<NewExpense> {
        Ok(NewExpense {
            name: parse_name(&self.name)?,
            amount: parse_amount(&self.amount)?,
            category: self.category,
            date: parse_date(&self.date)?,
        })
    }
}

/// Tagged per-row state. A row holds a draft only while it is being
/// edited or saved, so stale edits cannot leak into a plain row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowMode {
    Viewing,
    Editing(Draft),
    Saving(Draft),
}

/// Compute the set of fields whose edited value differs from the record,
/// after validating the draft. An empty patch means there is nothing to
/// send and the row can return straight to `Viewing`.
pub fn diff(expense: &Expense, draft: &Draft) -> Result<ExpensePatch> {
    let name = parse_name(&draft.name)?;
    let amount = parse_amount(&draft.amount)?;
    let date = parse_date(&draft.date)?;

    let mut patch = ExpensePatch::default();
    if name != expense.name {
        patch.name = Some(name);
    }
    if amount != expense.amount {
        patch.amount = Some(amount);
    }
    if draft.category != expense.category {
        patch.category = Some(draft.category);
    }
    if date != expense.date {
        patch.date = Some(date);
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense {
            id: 3,
            name: "Lunch".to_string(),
            amount: 12.5,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        }
    }

    #[test]
    fn untouched_snapshot_diffs_to_empty_patch() {
        let expense = lunch();
        let draft = Draft::snapshot(&expense);
        let patch = diff(&expense, &draft).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn amount_only_edit_patches_only_amount() {
        let expense = lunch();
        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Amount, "14.75".to_string());
        let patch = diff(&expense, &draft).unwrap();
        assert_eq!(patch.amount, Some(14.75));
        assert_eq!(patch.name, None);
        assert_eq!(patch.category, None);
        assert_eq!(patch.date, None);
    }

    #[test]
    fn retyping_the_same_amount_is_not_a_change() {
        let expense = lunch();
        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Amount, "12.50".to_string());
        assert!(diff(&expense, &draft).unwrap().is_empty());
    }

    #[test]
    fn every_field_can_change_at_once() {
        let expense = lunch();
        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Name, "Team lunch".to_string());
        draft.set(Field::Amount, "40".to_string());
        draft.set(Field::Category, "entertainment".to_string());
        draft.set(Field::Date, "2026-04-03".to_string());
        let patch = diff(&expense, &draft).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Team lunch"));
        assert_eq!(patch.amount, Some(40.0));
        assert_eq!(patch.category, Some(Category::Entertainment));
        assert_eq!(patch.date, NaiveDate::from_ymd_opt(2026, 4, 3));
    }

    #[test]
    fn invalid_draft_is_a_validation_error() {
        let expense = lunch();
        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Amount, "-1".to_string());
        assert!(matches!(diff(&expense, &draft), Err(Error::Validation(_))));

        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Date, "not a date".to_string());
        assert!(matches!(diff(&expense, &draft), Err(Error::Validation(_))));

        let mut draft = Draft::snapshot(&expense);
        draft.set(Field::Name, "   ".to_string());
        assert!(matches!(diff(&expense, &draft), Err(Error::Validation(_))));
    }

    #[test]
    fn unknown_category_input_keeps_the_current_value() {
        let mut draft = Draft::empty();
        draft.set(Field::Category, "housing".to_string());
        assert_eq!(draft.category, Category::Housing);
        draft.set(Field::Category, "not-a-category".to_string());
        assert_eq!(draft.category, Category::Housing);
    }

    #[test]
    fn complete_draft_builds_a_create_payload() {
        let mut draft = Draft::empty();
        draft.set(Field::Name, " Bus pass ".to_string());
        draft.set(Field::Amount, "45".to_string());
        draft.set(Field::Category, "transportation".to_string());
        draft.set(Field::Date, "2026-04-01".to_string());
        let new = draft.to_new_expense().unwrap();
        assert_eq!(new.name, "Bus pass");
        assert_eq!(new.amount, 45.0);
        assert_eq!(new.category, Category::Transportation);

        assert!(matches!(
            Draft::empty().to_new_expense(),
            Err(Error::Validation(_))
        ));
    }
}
