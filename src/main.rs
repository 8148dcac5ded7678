mod app;
mod backend;
mod config;
mod model;
mod state;
mod ui;
mod window;

use std::cell::RefCell;
use std::rc::Rc;

const APP_ID: &str = "org.manjaro.hello";
const APP_NAME: &str = "manjaro-hello";
const CSS: &str = include_str!("../style/style.css");

fn main() {
    env_logger::init();

    // Resolves and activates the locale, so it runs before GTK starts threads.
    let state = state::AppState::init(config::AppPaths::detect());

    let app = app::WelcomeApp::new(Rc::new(RefCell::new(state)));
    std::process::exit(app.run());
}
