pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{error, warn};
pub use theme::{theme, Theme};
