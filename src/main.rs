mod app;
mod components;
mod context;
mod data;
mod layout;
mod pages;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
