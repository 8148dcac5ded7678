#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    GooglePlus,
    Facebook,
    Twitter,
    Reddit,
}

impl Social {
    pub const ALL: [Social; 4] = [
        Social::GooglePlus,
        Social::Facebook,
        Social::Twitter,
        Social::Reddit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Social::GooglePlus => "Google+",
            Social::Facebook => "Facebook",
            Social::Twitter => "Twitter",
            Social::Reddit => "Reddit",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Social::GooglePlus => "https://plus.google.com/118244873957924966264",
            Social::Facebook => "https://www.facebook.com/ManjaroLinux",
            Social::Twitter => "https://twitter.com/ManjaroLinux",
            Social::Reddit => "https://www.reddit.com/r/ManjaroLinux",
        }
    }
}
