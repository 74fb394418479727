use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::page_shell;
use crate::error::Error;
use crate::fmt;
use crate::models::Expense;
use crate::notice::{Flash, Notice};
use crate::summary;

/// Bar width for a value against the largest value in its chart.
pub fn bar_percent(value: f64, max: f64) -> i32 {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * 100.0).round().clamp(0.0, 100.0) as i32
}

fn bar_row(label: String, amount: f64, max: f64) -> Html {
    html! {
        <div class="flex flex-col gap-1 text-sm">
            <div class="flex items-center justify-between">
                <span class="text-foreground">{ label }</span>
                <span class="text-muted-foreground">{ fmt::money(amount) }</span>
            </div>
            <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                <div class="h-full bg-primary" style={format!("width: {}%", bar_percent(amount, max))}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub client: ApiClient,
    pub on_auth_error: Callback<()>,
}

#[function_component(SummaryPage)]
pub fn summary_page(props: &Props) -> Html {
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
    let max_category = summary.by_category.values().cloned().fold(0.0, f64::max);
    let max_month = summary.by_month.values().cloned().fold(0.0, f64::max);

    html! {
        { page_shell(
            "Summary",
            html! {
                <span class="text-sm text-muted-foreground">
                    { format!("{} across {} expenses", fmt::money(summary.total), summary.count) }
                </span>
            },
            html! {
                <>
                    <Flash notice={(*notice).clone()} seq={u32::from(notice.is_some())} />

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="font-bold text-foreground text-lg">{"By Category"}</h3>
                                <span class="text-xs text-muted-foreground">{"All time"}</span>
                            </div>
                            {
                                if *loading {
                                    html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> }
                                } else if summary.by_category.is_empty() {
                                    html! { <p class="text-sm text-muted-foreground">{"Nothing to chart yet."}</p> }
                                } else {
                                    html! {
                                        <div class="space-y-2">
                                            { for summary.by_category.iter().map(|(category, amount)| {
                                                bar_row(category.label().to_string(), *amount, max_category)
                                            }) }
                                        </div>
                                    }
                                }
                            }
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="font-bold text-foreground text-lg">{"By Month"}</h3>
                                <span class="text-xs text-muted-foreground">{"Oldest first"}</span>
                            </div>
                            {
                                if *loading {
                                    html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> }
                                } else if summary.by_month.is_empty() {
                                    html! { <p class="text-sm text-muted-foreground">{"Nothing to chart yet."}</p> }
                                } else {
                                    html! {
                                        <div class="space-y-2">
                                            { for summary.by_month.iter().map(|(month, amount)| {
                                                bar_row(month.clone(), *amount, max_month)
                                            }) }
                                        </div>
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

#[cfg(test)]
mod tests {
    use super::bar_percent;

    #[test]
    fn zero_max_yields_zero_width() {
        assert_eq!(bar_percent(10.0, 0.0), 0);
        assert_eq!(bar_percent(0.0, 0.0), 0);
    }

    #[test]
    fn width_is_share_of_max() {
        assert_eq!(bar_percent(50.0, 200.0), 25);
        assert_eq!(bar_percent(200.0, 200.0), 100);
        assert_eq!(bar_percent(1.0, 3.0), 33);
    }

    #[test]
    fn width_never_exceeds_bounds() {
        assert_eq!(bar_percent(300.0, 200.0), 100);
        assert_eq!(bar_percent(-5.0, 200.0), 0);
    }
}
