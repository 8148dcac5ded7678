use gtk4 as gtk;
use gtk::prelude::*;
use gtk::{gio, glib};
use libadwaita as adw;
use adw::prelude::*;
use gettextrs::gettext;

use crate::state::AppState;
use crate::ui::about;
use crate::ui::home::HomeView;
use crate::ui::pages::{self, DocumentationView, ProjectView};
use crate::ui::{Action, Dispatch, Section};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct MainWindow;

impl MainWindow {
    pub fn new(app: &adw::Application, state: Rc<RefCell<AppState>>) -> adw::ApplicationWindow {
        let window = adw::ApplicationWindow::builder()
            .application(app)
            .default_width(800)
            .default_height(560)
            .build();

        let controller = Controller::new(&window, state);
        controller.render();

        // The window owns the controller; handlers only hold weak references.
        window.connect_close_request(move |_| {
            controller.views.borrow_mut().take();
            log::debug!("Main window closed");
            glib::Propagation::Proceed
        });

        window
    }
}

/// Widgets that handlers need to reach after the content is built.
struct Views {
    stack: gtk::Stack,
    documentation: gtk::Notebook,
    project: gtk::Notebook,
    back: gtk::Button,
}

struct Controller {
    state: Rc<RefCell<AppState>>,
    window: glib::WeakRef<adw::ApplicationWindow>,
    views: RefCell<Option<Views>>,
    dispatch: Dispatch,
}

impl Controller {
    fn new(window: &adw::ApplicationWindow, state: Rc<RefCell<AppState>>) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Controller>| {
            let weak = weak.clone();
            let dispatch: Dispatch = Rc::new(move |action| {
                if let Some(controller) = weak.upgrade() {
                    controller.handle(action);
                }
            });
            Controller {
                state,
                window: window.downgrade(),
                views: RefCell::new(None),
                dispatch,
            }
        })
    }

    fn handle(self: &Rc<Self>, action: Action) {
        log::debug!("{:?}", action);
        match action {
            Action::Show(section) => self.show(section),
            Action::Home => self.show_home(),
            Action::Install(installer) => {
                if let Err(e) = installer.launch() {
                    log::error!("{}", e);
                    self.show_error(&e);
                }
            }
            Action::OpenSocial(social) => self.open_uri(social.url()),
            Action::SetAutostart(enabled) => self.state.borrow_mut().set_autostart(enabled),
            Action::SetLanguage(code) => {
                let changed = self.state.borrow_mut().set_locale(&code);
                if changed {
                    // Rebuild outside the drop-down's own signal emission.
                    let controller = self.clone();
                    glib::idle_add_local_once(move || controller.render());
                }
            }
            Action::About => {
                if let Some(window) = self.window.upgrade() {
                    about::present(&window);
                }
            }
        }
    }

    /// Build (or rebuild) the whole window content from the current state.
    fn render(&self) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let state = self.state.borrow();

        let title = adw::WindowTitle::new(&gettext("Manjaro Hello"), &state.info.subtitle());
        let header = adw::HeaderBar::new();
        header.set_title_widget(Some(&title));

        let back = gtk::Button::from_icon_name("go-previous-symbolic");
        back.set_tooltip_text(Some(&gettext("Back")));
        back.set_visible(false);
        let dispatch = self.dispatch.clone();
        back.connect_clicked(move |_| dispatch(Action::Home));
        header.pack_start(&back);

        let about_button = gtk::Button::from_icon_name("help-about-symbolic");
        about_button.set_tooltip_text(Some(&gettext("About")));
        let dispatch = self.dispatch.clone();
        about_button.connect_clicked(move |_| dispatch(Action::About));
        header.pack_end(&about_button);

        let stack = gtk::Stack::new();
        stack.set_transition_type(gtk::StackTransitionType::Crossfade);
        stack.set_vexpand(true);
        stack.set_hexpand(true);

        let home = HomeView::new(&state, &self.dispatch);
        stack.add_named(&home.widget, Some(pages::HOME));
        let documentation = DocumentationView::new(&state);
        stack.add_named(&documentation.widget, Some(pages::DOCUMENTATION));
        let project = ProjectView::new(&state);
        stack.add_named(&project.widget, Some(pages::PROJECT));
        stack.set_visible_child_name(pages::HOME);

        let main_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        main_box.append(&header);
        main_box.append(&stack);

        window.set_title(Some(&gettext("Manjaro Hello")));
        window.set_content(Some(&main_box));

        *self.views.borrow_mut() = Some(Views {
            stack,
            documentation: documentation.widget,
            project: project.widget,
            back,
        });
    }

    fn show(&self, section: Section) {
        let views = self.views.borrow();
        let Some(views) = views.as_ref() else {
            return;
        };
        let (child, page) = section.location();
        let notebook = if child == pages::PROJECT {
            &views.project
        } else {
            &views.documentation
        };
        views.stack.set_visible_child_name(child);
        notebook.set_current_page(Some(page));
        views.back.set_visible(true);
    }

    fn show_home(&self) {
        if let Some(views) = self.views.borrow().as_ref() {
            views.stack.set_visible_child_name(pages::HOME);
            views.back.set_visible(false);
        }
    }

    fn open_uri(&self, uri: &str) {
        let window = self.window.upgrade();
        let uri_owned = uri.to_string();
        gtk::UriLauncher::new(uri).launch(
            window.as_ref(),
            gio::Cancellable::NONE,
            move |result| {
                if let Err(e) = result {
                    log::warn!("Failed to open {}: {}", uri_owned, e);
                }
            },
        );
    }

    fn show_error(&self, message: &str) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let dialog = gtk::MessageDialog::new(
            Some(&window),
            gtk::DialogFlags::MODAL | gtk::DialogFlags::DESTROY_WITH_PARENT,
            gtk::MessageType::Error,
            gtk::ButtonsType::Ok,
            message,
        );
        dialog.connect_response(|d, _| d.close());
        dialog.present();
    }
}
