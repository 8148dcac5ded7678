use gtk4 as gtk;
use gtk::prelude::*;
use gtk::glib;
use gettextrs::gettext;

use crate::backend::installer::Installer;
use crate::backend::locale;
use crate::model::Social;
use crate::state::AppState;
use crate::ui::{Action, Dispatch, Section};

pub struct HomeView {
    pub widget: gtk::Box,
}

impl HomeView {
    pub fn new(state: &AppState, dispatch: &Dispatch) -> Self {
        let widget = gtk::Box::new(gtk::Orientation::Vertical, 18);
        widget.add_css_class("home-view");
        widget.set_margin_start(24);
        widget.set_margin_end(24);
        widget.set_margin_top(24);
        widget.set_margin_bottom(18);

        let title = gtk::Label::new(Some(&gettext("Welcome to Manjaro!")));
        title.add_css_class("title-1");
        widget.append(&title);

        let intro = gtk::Label::new(Some(&gettext(
            "Thank you for joining our community!\n\n\
             We, the Manjaro Developers, hope that you will enjoy using Manjaro as much as we \
             enjoy building it. The links below will help you get started with your new \
             operating system. So enjoy the experience, and don't hesitate to send us your feedback.",
        )));
        intro.set_wrap(true);
        intro.set_justify(gtk::Justification::Center);
        widget.append(&intro);

        widget.append(&section_buttons(dispatch));

        if state.info.live {
            if let Some(install) = install_buttons(dispatch) {
                widget.append(&install);
            }
        }

        let spacer = gtk::Box::new(gtk::Orientation::Vertical, 0);
        spacer.set_vexpand(true);
        widget.append(&spacer);

        widget.append(&social_buttons(dispatch));
        widget.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
        widget.append(&footer(state, dispatch));

        Self { widget }
    }
}

fn section_buttons(dispatch: &Dispatch) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    row.set_halign(gtk::Align::Center);
    row.set_homogeneous(true);

    for (label, section) in [
        (gettext("Readme"), Section::Readme),
        (gettext("Release info"), Section::Release),
        (gettext("Get involved"), Section::Involved),
    ] {
        let button = gtk::Button::with_label(&label);
        let dispatch = dispatch.clone();
        button.connect_clicked(move |_| dispatch(Action::Show(section)));
        row.append(&button);
    }

    row
}

/// Installer buttons, or nothing if no installer is present.
fn install_buttons(dispatch: &Dispatch) -> Option<gtk::Box> {
    let available = Installer::available();
    if available.is_empty() {
        return None;
    }

    let column = gtk::Box::new(gtk::Orientation::Vertical, 6);
    let label = gtk::Label::new(Some(&gettext("Installation")));
    label.add_css_class("heading");
    column.append(&label);

    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    row.set_halign(gtk::Align::Center);
    for installer in available {
        let text = match installer {
            Installer::Gui => gettext("Launch installer"),
            Installer::Cli => gettext("Launch CLI installer"),
        };
        let button = gtk::Button::with_label(&text);
        button.add_css_class("suggested-action");
        let dispatch = dispatch.clone();
        button.connect_clicked(move |_| dispatch(Action::Install(installer)));
        row.append(&button);
    }
    column.append(&row);

    Some(column)
}

fn social_buttons(dispatch: &Dispatch) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    row.set_halign(gtk::Align::Center);

    for social in Social::ALL {
        let button = gtk::Button::with_label(social.label());
        button.add_css_class("flat");
        button.set_tooltip_text(Some(social.url()));
        let dispatch = dispatch.clone();
        button.connect_clicked(move |_| dispatch(Action::OpenSocial(social)));
        row.append(&button);
    }

    row
}

fn footer(state: &AppState, dispatch: &Dispatch) -> gtk::Box {
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 12);

    let names: Vec<String> = state.locales.iter().map(|c| locale::language_name(c)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let languages = gtk::DropDown::from_strings(&names);
    languages.set_tooltip_text(Some(&gettext("Language")));
    if let Some(idx) = state.locales.iter().position(|c| c == state.locale()) {
        languages.set_selected(idx as u32);
    }
    // Connected after the initial selection so it does not fire a change.
    let codes = state.locales.clone();
    let on_language = dispatch.clone();
    languages.connect_selected_notify(move |dd| {
        if let Some(code) = codes.get(dd.selected() as usize) {
            on_language(Action::SetLanguage(code.clone()));
        }
    });
    footer.append(&languages);

    let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    footer.append(&spacer);

    footer.append(&gtk::Label::new(Some(&gettext("Launch at start"))));
    let autostart = gtk::Switch::new();
    autostart.set_valign(gtk::Align::Center);
    autostart.set_active(state.prefs.autostart);
    let on_autostart = dispatch.clone();
    autostart.connect_state_set(move |_, enabled| {
        on_autostart(Action::SetAutostart(enabled));
        glib::Propagation::Proceed
    });
    footer.append(&autostart);

    footer
}
