mod page;
mod social;
mod system_info;

pub use page::Page;
pub use social::Social;
pub use system_info::{Arch, SystemInfo};
