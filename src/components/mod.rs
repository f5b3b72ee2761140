pub mod helpers;
pub mod palette;
pub mod toast;
