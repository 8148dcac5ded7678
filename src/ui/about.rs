use gtk4 as gtk;
use gtk::prelude::*;
use libadwaita as adw;
use gettextrs::gettext;

use crate::APP_ID;

pub fn present(parent: &adw::ApplicationWindow) {
    let about = adw::AboutWindow::builder()
        .transient_for(parent)
        .modal(true)
        .application_name(gettext("Manjaro Hello"))
        .application_icon(APP_ID)
        .version(env!("CARGO_PKG_VERSION"))
        .developer_name("Manjaro Team")
        .website("https://manjaro.org")
        .comments(gettext("Welcome screen for Manjaro"))
        .license_type(gtk::License::Gpl30)
        .build();
    about.present();
}
