use gtk4 as gtk;
use gtk::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use crate::state::AppState;
use crate::window::MainWindow;
use crate::CSS;
use crate::APP_ID;
use std::cell::RefCell;
use std::rc::Rc;

pub struct WelcomeApp {
    app: adw::Application,
}

impl WelcomeApp {
    pub fn new(state: Rc<RefCell<AppState>>) -> Self {
        let app = adw::Application::builder()
            .application_id(APP_ID)
            .build();

        app.connect_startup(|_| {
            load_css();
        });

        app.connect_activate(move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }
            let window = MainWindow::new(app, state.clone());
            window.present();
        });

        Self { app }
    }

    pub fn run(&self) -> i32 {
        self.app.run().into()
    }
}

fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_string(CSS);

    match gtk::gdk::Display::default() {
        Some(display) => gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => log::warn!("No display available, skipping custom CSS"),
    }
}
