mod api;
mod app;
mod auth;
mod charts;
mod config;
mod dashboard;
mod error;
mod expenses;
mod fmt;
mod icons;
mod models;
mod notice;
mod row;
mod session;
mod summary;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
