pub mod autostart;
pub mod installer;
pub mod locale;
pub mod pages;
pub mod system_info;
