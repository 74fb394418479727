use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::notice::{Flash, Notice};
use crate::session::{Session, TokenPair};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: AppConfig,
    /// Shown on arrival, e.g. after a forced sign-out.
    #[prop_or_default]
    pub notice: Option<Notice>,
    pub on_authenticated: Callback<Session>,
}

pub enum Msg {
    SetUsername(String),
    SetEmail(String),
    SetPassword(String),
    ToggleMode,
    Submit,
    Finished(Result<TokenPair>),
}

/// Login / register card. On success it persists the issued tokens and
/// hands the session up to the caller.
pub struct AuthScreen {
    mode: Mode,
    username: String,
    email: String,
    password: String,
    busy: bool,
    notice: Option<Notice>,
    seq: u32,
}

impl AuthScreen {
    fn post(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.seq += 1;
    }
}

impl Component for AuthScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        AuthScreen {
            mode: Mode::Login,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            busy: false,
            notice: ctx.props().notice.clone(),
            seq: u32::from(ctx.props().notice.is_some()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                true
            }
            Msg::SetEmail(value) => {
                self.email = value;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                true
            }
            Msg::ToggleMode => {
                self.mode = match self.mode {
                    Mode::Login => Mode::Register,
                    Mode::Register => Mode::Login,
                };
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                let username = self.username.trim().to_string();
                let email = self.email.trim().to_string();
                let password = self.password.clone();

                let missing = match self.mode {
                    Mode::Login => username.is_empty() || password.is_empty(),
                    Mode::Register => {
                        username.is_empty() || email.is_empty() || password.is_empty()
                    }
                };
                if missing {
                    self.post(Notice::from(Error::validation("All fields are required")));
                    return true;
                }

                self.busy = true;
                let client = ApiClient::new(&ctx.props().config, Session::default());
                let mode = self.mode;
                ctx.link().send_future(async move {
                    let outcome = match mode {
                        Mode::Login => client.login(&username, &password).await,
                        Mode::Register => client.register(&username, &email, &password).await,
                    };
                    Msg::Finished(outcome)
                });
                true
            }
            Msg::Finished(Ok(tokens)) => {
                self.busy = false;
                let session = Session::from_tokens(tokens);
                session.save();
                ctx.props().on_authenticated.emit(session);
                true
            }
            Msg::Finished(Err(err)) => {
                self.busy = false;
                self.post(err.into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let is_login = self.mode == Mode::Login;

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_username = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetUsername(input.value())
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetEmail(input.value())
        });
        let on_password = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetPassword(input.value())
        });
        let toggle_mode = link.callback(|_| Msg::ToggleMode);

        html! {
            <div class="min-h-screen flex items-center justify-center bg-background">
                <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                    <div class="text-center mb-6">
                        <h1 class="text-2xl font-bold text-foreground">{ if is_login { "Welcome back" } else { "Create account" } }</h1>
                        <p class="text-sm text-muted-foreground mt-2">
                            { if is_login { "Sign in to continue." } else { "Start tracking your expenses." } }
                        </p>
                    </div>

                    <Flash notice={self.notice.clone()} seq={self.seq} />

                    <form class="space-y-4" onsubmit={on_submit}>
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Username"}</label>
                            <input
                                type="text"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={self.username.clone()}
                                oninput={on_username}
                                disabled={self.busy}
                            />
                        </div>

                        if !is_login {
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-foreground">{"Email"}</label>
                                <input
                                    type="email"
                                    class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                    value={self.email.clone()}
                                    oninput={on_email}
                                    disabled={self.busy}
                                />
                            </div>
                        }

                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Password"}</label>
                            <input
                                type="password"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={self.password.clone()}
                                oninput={on_password}
                                disabled={self.busy}
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                            disabled={self.busy}
                        >
                            { if self.busy { "Please wait..." } else if is_login { "Login" } else { "Sign up" } }
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm text-muted-foreground">
                        { if is_login { "No account?" } else { "Already have an account?" } }
                        <button class="ml-2 text-primary font-semibold" onclick={toggle_mode}>
                            { if is_login { "Sign up" } else { "Login" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
