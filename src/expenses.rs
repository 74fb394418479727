use std::collections::{HashMap, HashSet};

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::page_shell;
use crate::error::{Error, Result};
use crate::fmt;
use crate::icons::icon_plus;
use crate::models::{matches_filters, Category, Expense};
use crate::notice::{Flash, Notice};
use crate::row::{diff, Draft, Field, RowMode};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client: ApiClient,
    pub on_auth_error: Callback<()>,
}

pub enum Msg {
    Loaded(Result<Vec<Expense>>),
    Refresh,
    ToggleAdd,
    FormChanged(Field, String),
    ClearForm,
    SubmitForm,
    Created(Result<Expense>),
    SearchChanged(String),
    FilterChanged(String),
    EditRow(i64),
    CancelRow(i64),
    DraftChanged(i64, Field, String),
    SaveRow(i64),
    RowSaved(i64, Result<Expense>),
    DeleteRow(i64),
    RowDeleted(i64, Result<()>),
}

/// Expense table with add form, filters and inline row editing. Every
/// row is viewing, editing, or waiting on a save; rows with no entry in
/// `row_modes` are viewing.
pub struct ExpensesPage {
    expenses: Vec<Expense>,
    loading: bool,
    row_modes: HashMap<i64, RowMode>,
    deleting: HashSet<i64>,
    show_add: bool,
    form: Draft,
    form_busy: bool,
    search: String,
    filter: Option<Category>,
    notice: Option<Notice>,
    seq: u32,
}

impl ExpensesPage {
    fn post(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.seq += 1;
    }

    /// Auth failures bubble up so the whole app can drop the session;
    /// everything else is shown in place.
    fn handle_error(&mut self, ctx: &Context<Self>, err: Error) {
        if matches!(err, Error::Auth(_)) {
            ctx.props().on_auth_error.emit(());
        } else {
            self.post(err.into());
        }
    }

    fn fetch(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        let client = ctx.props().client.clone();
        ctx.link()
            .send_future(async move { Msg::Loaded(client.list_expenses().await) });
    }

    fn expense(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }
}

impl Component for ExpensesPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = ExpensesPage {
            expenses: Vec::new(),
            loading: false,
            row_modes: HashMap::new(),
            deleting: HashSet::new(),
            show_add: false,
            form: Draft::empty(),
            form_busy: false,
            search: String::new(),
            filter: None,
            notice: None,
            seq: 0,
        };
        page.fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(expenses) => {
                        // drop per-row state for rows that no longer exist
                        self.row_modes
                            .retain(|id, _| expenses.iter().any(|e| e.id == *id));
                        self.deleting.retain(|id| expenses.iter().any(|e| e.id == *id));
                        self.expenses = expenses;
                    }
                    Err(err) => self.handle_error(ctx, err),
                }
                true
            }
            Msg::Refresh => {
                if !self.loading {
                    self.fetch(ctx);
                }
                true
            }
            Msg::ToggleAdd => {
                self.show_add = !self.show_add;
                true
            }
            Msg::FormChanged(field, value) => {
                self.form.set(field, value);
                true
            }
            Msg::ClearForm => {
                self.form = Draft::empty();
                true
            }
            Msg::SubmitForm => {
                if self.form_busy {
                    return false;
                }
                match self.form.to_new_expense() {
                    Err(err) => self.post(err.into()),
                    Ok(new_expense) => {
                        self.form_busy = true;
                        let client = ctx.props().client.clone();
                        ctx.link().send_future(async move {
                            Msg::Created(client.create_expense(&new_expense).await)
                        });
                    }
                }
                true
            }
            Msg::Created(result) => {
                self.form_busy = false;
                match result {
                    Ok(expense) => {
                        self.expenses.insert(0, expense);
                        self.form = Draft::empty();
                        self.post(Notice::success("Expense added successfully!"));
                    }
                    Err(err) => self.handle_error(ctx, err),
                }
                true
            }
            Msg::SearchChanged(value) => {
                self.search = value;
                true
            }
            Msg::FilterChanged(raw) => {
                self.filter = Category::parse(&raw);
                true
            }
            Msg::EditRow(id) => {
                if let Some(expense) = self.expense(id) {
                    self.row_modes
                        .insert(id, RowMode::Editing(Draft::snapshot(expense)));
                }
                true
            }
            Msg::CancelRow(id) => {
                self.row_modes.insert(id, RowMode::Viewing);
                true
            }
            Msg::DraftChanged(id, field, value) => {
                if let Some(RowMode::Editing(draft)) = self.row_modes.get_mut(&id) {
                    draft.set(field, value);
                }
                true
            }
            Msg::SaveRow(id) => {
                let Some(expense) = self.expense(id) else {
                    return true;
                };
                let Some(RowMode::Editing(draft)) = self.row_modes.get(&id) else {
                    return true;
                };
                match diff(expense, draft) {
                    Err(err) => self.post(err.into()),
                    // nothing changed, no request to make
                    Ok(patch) if patch.is_empty() => {
                        self.row_modes.insert(id, RowMode::Viewing);
                    }
                    Ok(patch) => {
                        let draft = draft.clone();
                        self.row_modes.insert(id, RowMode::Saving(draft));
                        let client = ctx.props().client.clone();
                        ctx.link().send_future(async move {
                            Msg::RowSaved(id, client.update_expense(id, &patch).await)
                        });
                    }
                }
                true
            }
            Msg::RowSaved(id, result) => {
                match result {
                    Ok(updated) => {
                        if let Some(slot) = self.expenses.iter_mut().find(|e| e.id == id) {
                            *slot = updated;
                        }
                        self.row_modes.insert(id, RowMode::Viewing);
                        self.post(Notice::success("Expense updated successfully!"));
                    }
                    Err(err) => {
                        if matches!(err, Error::Auth(_)) {
                            ctx.props().on_auth_error.emit(());
                        } else {
                            // keep the draft so the edits survive the failure
                            if let Some(RowMode::Saving(draft)) = self.row_modes.remove(&id) {
                                self.row_modes.insert(id, RowMode::Editing(draft));
                            }
                            self.post(err.into());
                        }
                    }
                }
                true
            }
            Msg::DeleteRow(id) => {
                if self.deleting.insert(id) {
                    let client = ctx.props().client.clone();
                    ctx.link().send_future(async move {
                        Msg::RowDeleted(id, client.delete_expense(id).await)
                    });
                }
                true
            }
            Msg::RowDeleted(id, result) => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        self.expenses.retain(|e| e.id != id);
                        self.row_modes.remove(&id);
                        self.post(Notice::success("Expense deleted successfully!"));
                    }
                    Err(err) => self.handle_error(ctx, err),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| matches_filters(e, &self.search, self.filter))
            .collect();

        let on_toggle_add = link.callback(|_| Msg::ToggleAdd);
        let on_refresh = link.callback(|_| Msg::Refresh);
        let on_search = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SearchChanged(input.value())
        });
        let on_filter = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::FilterChanged(select.value())
        });

        let rows = if self.loading {
            html! { <tr><td colspan="5" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
        } else if self.expenses.is_empty() {
            html! { <tr><td colspan="5" class="px-8 py-6 text-center text-muted-foreground">{"No expenses yet."}</td></tr> }
        } else if visible.is_empty() {
            html! { <tr><td colspan="5" class="px-8 py-6 text-center text-muted-foreground">{"No expenses match your filters."}</td></tr> }
        } else {
            html! { { for visible.into_iter().map(|expense| self.view_row(ctx, expense)) } }
        };

        html! {
            { page_shell(
                "Expenses",
                html! {
                    <div class="flex items-center gap-2">
                        <button onclick={on_refresh} class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all" disabled={self.loading}>
                            { if self.loading { "Loading..." } else { "Refresh" } }
                        </button>
                        <button onclick={on_toggle_add} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                            { icon_plus() }
                            { if self.show_add { "Close" } else { "Add Expense" } }
                        </button>
                    </div>
                },
                html! {
                    <>
                        <Flash notice={self.notice.clone()} seq={self.seq} />

                        { if self.show_add { self.view_add_form(ctx) } else { html! {} } }

                        <div class="bg-card rounded-[10px] p-4 border border-border flex flex-col md:flex-row gap-3">
                            <input
                                type="text"
                                placeholder="Search expenses..."
                                value={self.search.clone()}
                                oninput={on_search}
                                class="flex-1 bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-[#173E63] border-none focus:ring-2 focus:ring-[#1D617A] outline-none"
                            />
                            <select onchange={on_filter} class="md:w-56 bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-sm focus:ring-2 focus:ring-[#1D617A] outline-none">
                                <option value="" selected={self.filter.is_none()}>{"All Categories"}</option>
                                { for Category::ALL.iter().map(|category| html! {
                                    <option value={category.key()} selected={self.filter == Some(*category)}>{ category.label() }</option>
                                }) }
                            </select>
                        </div>

                        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                            <div class="p-5 flex justify-between items-center border-b border-border">
                                <h3 class="font-bold text-lg text-foreground">{"All Expenses"}</h3>
                                <span class="text-xs text-muted-foreground">
                                    { format!("{} total", self.expenses.len()) }
                                </span>
                            </div>
                            <div class="overflow-x-auto">
                                <table class="w-full text-left border-collapse">
                                    <thead>
                                        <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                            <th class="px-6 py-4 font-bold">{"Date"}</th>
                                            <th class="px-6 py-4 font-bold">{"Name"}</th>
                                            <th class="px-6 py-4 font-bold">{"Category"}</th>
                                            <th class="px-6 py-4 font-bold text-right">{"Amount"}</th>
                                            <th class="px-6 py-4 font-bold text-right">{"Actions"}</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        { rows }
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </>
                }
            ) }
        }
    }
}

impl ExpensesPage {
    fn view_add_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FormChanged(Field::Name, input.value())
        });
        let on_amount = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FormChanged(Field::Amount, input.value())
        });
        let on_category = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::FormChanged(Field::Category, select.value())
        });
        let on_date = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FormChanged(Field::Date, input.value())
        });
        let on_submit = link.callback(|_| Msg::SubmitForm);
        let on_clear = link.callback(|_| Msg::ClearForm);

        html! {
            <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Expense"}</h4>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Name"}</label>
                        <input type="text" placeholder="What was it for?" value={self.form.name.clone()} oninput={on_name} disabled={self.form_busy}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                        <input type="number" step="0.01" placeholder="0.00" value={self.form.amount.clone()} oninput={on_amount} disabled={self.form_busy}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                        <select onchange={on_category} disabled={self.form_busy}
                            class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                            { for Category::ALL.iter().map(|category| html! {
                                <option value={category.key()} selected={self.form.category == *category}>{ category.label() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                        <input type="date" value={self.form.date.clone()} oninput={on_date} disabled={self.form_busy}
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                    </div>
                </div>
                <div class="flex gap-3">
                    <button onclick={on_submit} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold flex items-center justify-center gap-2" disabled={self.form_busy}>
                        { if self.form_busy { "Saving..." } else { "Add Expense" } }
                    </button>
                    <button onclick={on_clear} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[10px] font-bold flex items-center justify-center gap-2" disabled={self.form_busy}>
                        {"Clear"}
                    </button>
                </div>
            </div>
        }
    }

    fn view_row(&self, ctx: &Context<Self>, expense: &Expense) -> Html {
        match self.row_modes.get(&expense.id) {
            Some(RowMode::Editing(draft)) => self.view_edit_row(ctx, expense.id, draft, false),
            Some(RowMode::Saving(draft)) => self.view_edit_row(ctx, expense.id, draft, true),
            _ => self.view_plain_row(ctx, expense),
        }
    }

    fn view_plain_row(&self, ctx: &Context<Self>, expense: &Expense) -> Html {
        let id = expense.id;
        let link = ctx.link();
        let pending = self.deleting.contains(&id);
        let on_edit = link.callback(move |_| Msg::EditRow(id));
        let on_delete = link.callback(move |_| Msg::DeleteRow(id));

        html! {
            <tr key={id} class="text-sm hover:bg-muted/40 transition-colors">
                <td class="px-6 py-4 text-muted-foreground">{ expense.date.to_string() }</td>
                <td class="px-6 py-4 text-foreground">{ expense.name.clone() }</td>
                <td class="px-6 py-4">
                    <span class="bg-secondary text-secondary-foreground px-2.5 py-1 rounded-md text-[9px] font-bold">{ expense.category.label() }</span>
                </td>
                <td class="px-6 py-4 text-right font-semibold text-foreground">{ fmt::money(expense.amount) }</td>
                <td class="px-6 py-4 text-right">
                    <div class="flex justify-end gap-2">
                        <button onclick={on_edit} disabled={pending}
                            class="px-3 py-1.5 rounded-[10px] text-[10px] font-bold bg-[#B2CBDE] text-[#173E63] hover:opacity-90 transition-all">
                            {"Edit"}
                        </button>
                        <button onclick={on_delete} disabled={pending}
                            class="px-3 py-1.5 rounded-[10px] text-[10px] font-bold bg-red-50 text-red-600 border border-red-200 hover:bg-red-100 transition-all">
                            { if pending { "Deleting..." } else { "Delete" } }
                        </button>
                    </div>
                </td>
            </tr>
        }
    }

    fn view_edit_row(&self, ctx: &Context<Self>, id: i64, draft: &Draft, saving: bool) -> Html {
        let link = ctx.link();
        let on_name = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::DraftChanged(id, Field::Name, input.value())
        });
        let on_amount = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::DraftChanged(id, Field::Amount, input.value())
        });
        let on_category = link.callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::DraftChanged(id, Field::Category, select.value())
        });
        let on_date = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::DraftChanged(id, Field::Date, input.value())
        });
        let on_save = link.callback(move |_| Msg::SaveRow(id));
        let on_cancel = link.callback(move |_| Msg::CancelRow(id));

        html! {
            <tr key={id} class="text-sm bg-muted/20">
                <td class="px-6 py-3">
                    <input type="date" value={draft.date.clone()} oninput={on_date} disabled={saving}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                </td>
                <td class="px-6 py-3">
                    <input type="text" value={draft.name.clone()} oninput={on_name} disabled={saving}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                </td>
                <td class="px-6 py-3">
                    <select onchange={on_category} disabled={saving}
                        class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                        { for Category::ALL.iter().map(|category| html! {
                            <option value={category.key()} selected={draft.category == *category}>{ category.label() }</option>
                        }) }
                    </select>
                </td>
                <td class="px-6 py-3">
                    <input type="number" step="0.01" value={draft.amount.clone()} oninput={on_amount} disabled={saving}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none text-right" />
                </td>
                <td class="px-6 py-3 text-right">
                    <div class="flex justify-end gap-2">
                        <button onclick={on_save} disabled={saving}
                            class="px-3 py-1.5 rounded-[10px] text-[10px] font-bold bg-[#173E63] text-white hover:opacity-90 transition-all">
                            { if saving { "Saving..." } else { "Save" } }
                        </button>
                        <button onclick={on_cancel} disabled={saving}
                            class="px-3 py-1.5 rounded-[10px] text-[10px] font-bold bg-[#B2CBDE] text-[#173E63] hover:opacity-90 transition-all">
                            {"Cancel"}
                        </button>
                    </div>
                </td>
            </tr>
        }
    }
}
