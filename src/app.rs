use gloo_console::{log, warn};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::auth::AuthScreen;
use crate::charts::SummaryPage;
use crate::config::{self, AppConfig};
use crate::dashboard::DashboardPage;
use crate::expenses::ExpensesPage;
use crate::icons::{
    icon_bar_chart, icon_credit_card, icon_layout_grid, icon_log_out, icon_wallet,
};
use crate::notice::Notice;
use crate::session::Session;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Expenses,
    Summary,
}

pub enum Msg {
    Authenticated(Session),
    Navigate(Page),
    Logout,
    SessionExpired,
}

/// Top of the component tree. Holds the session and decides between the
/// auth screen and the signed-in layout; pages receive an API client
/// built from the current session instead of reading tokens themselves.
pub struct App {
    config: AppConfig,
    session: Session,
    page: Page,
    auth_notice: Option<Notice>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();
        // write back so a fresh install has the key to hand-edit
        config::save(&config);
        App {
            config,
            session: Session::load(),
            page: Page::Dashboard,
            auth_notice: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Authenticated(session) => {
                self.session = session;
                self.auth_notice = None;
                self.page = Page::Dashboard;
                true
            }
            Msg::Navigate(page) => {
                self.page = page;
                true
            }
            Msg::Logout => {
                Session::clear();
                self.session = Session::default();
                log!("signed out");
                true
            }
            Msg::SessionExpired => {
                warn!("session rejected by server, signing out");
                Session::clear();
                self.session = Session::default();
                self.auth_notice = Some(Notice::error("Session expired. Please login again."));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.session.is_authenticated() {
            let on_authenticated = ctx.link().callback(Msg::Authenticated);
            return html! {
                <AuthScreen
                    config={self.config.clone()}
                    notice={self.auth_notice.clone()}
                    on_authenticated={on_authenticated}
                />
            };
        }

        let client = ApiClient::new(&self.config, self.session.clone());
        let on_auth_error = ctx.link().callback(|_| Msg::SessionExpired);
        let content = match self.page {
            Page::Dashboard => html! {
                <DashboardPage client={client.clone()} on_auth_error={on_auth_error.clone()} />
            },
            Page::Expenses => html! {
                <ExpensesPage client={client.clone()} on_auth_error={on_auth_error.clone()} />
            },
            Page::Summary => html! {
                <SummaryPage client={client} on_auth_error={on_auth_error} />
            },
        };

        html! {
            <Layout
                active_page={self.page}
                on_select={ctx.link().callback(Msg::Navigate)}
                on_logout={ctx.link().callback(|_| Msg::Logout)}
            >
                { content }
            </Layout>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar
                    active_page={props.active_page}
                    on_select={props.on_select.clone()}
                    on_logout={props.on_logout.clone()}
                />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Expenses",
            page: Page::Expenses,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Summary",
            page: Page::Summary,
            icon: icon_bar_chart,
        },
    ];

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"pynance"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}
