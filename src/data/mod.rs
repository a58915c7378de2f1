mod nav;
mod plugin;
mod sidebar;
mod site;

pub use nav::*;
pub use plugin::*;
pub use sidebar::*;
pub use site::*;
