mod browser;
mod identity;
mod render;
mod signals;

pub use browser::*;
pub use identity::*;
pub use render::*;
pub use signals::*;
