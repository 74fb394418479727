use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::page_shell;
use crate::error::Error;
use crate::fmt;
use crate::icons::{icon_target, icon_trending_up, icon_wallet};
use crate::models::Expense;
use crate::notice::{Flash, Notice};
use crate::summary;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Wallet,
    TrendingUp,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::Target => icon_target(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client: ApiClient,
    pub on_auth_error: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &Props) -> Html {
    let expenses = use_state(|| Vec::<Expense>::new());
    let loading = use_state(|| true);
    let notice = use_state(|| None::<Notice>);

    {
        let expenses = expenses.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let client = props.client.clone();
        let on_auth_error = props.on_auth_error.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.list_expenses().await {
                        Ok(list) => expenses.set(list),
                        Err(Error::Auth(_)) => on_auth_error.emit(()),
                        Err(err) => notice.set(Some(err.into())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let summary = summary::project(&expenses);
    let this_month = summary.month_total(&summary::month_key(chrono::Local::now().date_naive()));
    let top_category = summary
        .top_category()
        .map(|(category, _)| category.label().to_string())
        .unwrap_or_else(|| "—".to_string());

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    <Flash notice={(*notice).clone()} seq={u32::from(notice.is_some())} />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Spent" value={fmt::money(summary.total)} icon={StatIcon::Wallet} />
                        <StatCard title="This Month" value={fmt::money(this_month)} icon={StatIcon::TrendingUp} />
                        <StatCard title="Top Category" value={top_category} icon={StatIcon::Target} />
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden mt-4">
                        <div class="p-6 flex justify-between items-center border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Expenses"}</h3>
                            <span class="text-xs text-muted-foreground">
                                { format!("{} total", summary.count) }
                            </span>
                        </div>
                        <div class="divide-y divide-border">
                            {
                                if *loading {
                                    html! { <p class="px-6 py-6 text-sm text-muted-foreground">{"Loading..."}</p> }
                                } else if expenses.is_empty() {
                                    html! { <p class="px-6 py-6 text-sm text-muted-foreground">{"No expenses yet."}</p> }
                                } else {
                                    html! {
                                        { for expenses.iter().take(8).map(|expense| html! {
                                            <div key={expense.id} class="px-6 py-4 flex items-center justify-between hover:bg-muted/30 transition-colors">
                                                <div>
                                                    <p class="text-sm font-bold text-[#173E63]">{ expense.name.clone() }</p>
                                                    <div class="flex items-center gap-2 mt-1">
                                                        <span class="bg-secondary text-secondary-foreground px-2.5 py-1 rounded-md text-[9px] font-bold">{ expense.category.label() }</span>
                                                        <span class="text-xs text-slate-400">{ expense.date.to_string() }</span>
                                                    </div>
                                                </div>
                                                <span class="text-sm font-semibold text-foreground">{ fmt::money(expense.amount) }</span>
                                            </div>
                                        }) }
                                    }
                                }
                            }
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
