/// Static markup pages shipped under `pages/<locale>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Readme,
    Release,
    Involved,
}

impl Page {
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Readme => "readme",
            Page::Release => "release",
            Page::Involved => "involved",
        }
    }
}
