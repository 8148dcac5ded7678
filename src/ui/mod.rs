pub mod about;
pub mod home;
pub mod pages;

use std::rc::Rc;

use crate::backend::installer::Installer;
use crate::model::Social;

/// Everything a widget in the window can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Show(Section),
    Home,
    Install(Installer),
    OpenSocial(Social),
    SetAutostart(bool),
    SetLanguage(String),
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Readme,
    Release,
    Involved,
}

impl Section {
    /// Stack child holding the section, and its notebook tab.
    pub fn location(self) -> (&'static str, u32) {
        match self {
            Section::Readme => (pages::DOCUMENTATION, 0),
            Section::Release => (pages::DOCUMENTATION, 1),
            Section::Involved => (pages::PROJECT, 0),
        }
    }
}

pub type Dispatch = Rc<dyn Fn(Action)>;
