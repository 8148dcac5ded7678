use gtk4 as gtk;
use gtk::prelude::*;
use gettextrs::gettext;

use crate::model::Page;
use crate::state::AppState;

pub const HOME: &str = "home";
pub const DOCUMENTATION: &str = "documentation";
pub const PROJECT: &str = "project";

/// Readme and release notes, one notebook tab each.
pub struct DocumentationView {
    pub widget: gtk::Notebook,
}

impl DocumentationView {
    pub fn new(state: &AppState) -> Self {
        let widget = gtk::Notebook::new();
        widget.append_page(
            &page_view(state.read_page(Page::Readme)),
            Some(&gtk::Label::new(Some(&gettext("Readme")))),
        );
        widget.append_page(
            &page_view(state.read_page(Page::Release)),
            Some(&gtk::Label::new(Some(&gettext("Release info")))),
        );
        Self { widget }
    }
}

pub struct ProjectView {
    pub widget: gtk::Notebook,
}

impl ProjectView {
    pub fn new(state: &AppState) -> Self {
        let widget = gtk::Notebook::new();
        widget.append_page(
            &page_view(state.read_page(Page::Involved)),
            Some(&gtk::Label::new(Some(&gettext("Get involved")))),
        );
        Self { widget }
    }
}

fn page_view(markup: Option<String>) -> gtk::ScrolledWindow {
    let label = gtk::Label::new(None);
    label.set_wrap(true);
    label.set_xalign(0.0);
    label.set_yalign(0.0);
    label.set_selectable(true);
    label.set_margin_start(18);
    label.set_margin_end(18);
    label.set_margin_top(12);
    label.set_margin_bottom(12);
    label.add_css_class("page-text");

    match markup {
        Some(markup) => label.set_markup(&markup),
        None => label.set_text(&gettext("This page is not available.")),
    }

    gtk::ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vexpand(true)
        .hexpand(true)
        .child(&label)
        .build()
}
