pub mod alert;
pub mod icons;
pub mod menu;
pub mod page_list;
pub mod page_option;

pub use alert::*;
pub use icons::*;
pub use menu::*;
pub use page_list::*;
pub use page_option::*;
