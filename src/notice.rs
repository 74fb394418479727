use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::error::Error;

/// How long a notice stays on screen.
const DISMISS_MILLIS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }
}

impl From<Error> for Notice {
    fn from(err: Error) -> Self {
        Notice::Error(err.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub notice: Option<Notice>,
    /// Bumped by the owner on every post so that repeating the same
    /// message still restarts the dismiss timer.
    pub seq: u32,
}

pub enum Msg {
    Dismiss,
}

/// Inline transient message bar. Shows whatever notice the owner last
/// posted and hides itself after a fixed delay; nothing here is fatal,
/// the triggering action can simply be retried.
pub struct Flash {
    visible: bool,
    timer: Option<Timeout>,
}

impl Component for Flash {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let visible = ctx.props().notice.is_some();
        Flash {
            visible,
            timer: visible.then(|| schedule(ctx)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Dismiss => {
                self.visible = false;
                self.timer = None;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.visible = ctx.props().notice.is_some();
        // replacing the handle cancels any previous countdown
        self.timer = self.visible.then(|| schedule(ctx));
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let notice = match ctx.props().notice.as_ref() {
            Some(notice) if self.visible => notice,
            _ => return html! {},
        };
        let (class, message) = match notice {
            Notice::Success(message) => (
                "mb-4 px-4 py-3 rounded-[10px] text-sm bg-green-50 text-green-700 border border-green-200",
                message,
            ),
            Notice::Error(message) => (
                "mb-4 px-4 py-3 rounded-[10px] text-sm bg-red-50 text-red-600 border border-red-200",
                message,
            ),
        };
        html! {
            <div class={class}>{ message.clone() }</div>
        }
    }
}

fn schedule(ctx: &Context<Flash>) -> Timeout {
    let link = ctx.link().clone();
    Timeout::new(DISMISS_MILLIS, move || link.send_message(Msg::Dismiss))
}
