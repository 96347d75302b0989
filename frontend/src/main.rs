use crate::app::App;

mod app;
mod client;
mod components;
mod config;
mod icons;
mod pages;
mod routes;
#[cfg(test)]
mod test_support;

fn main() {
    yew::Renderer::<App>::new().render();
}
