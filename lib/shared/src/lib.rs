pub mod alert;
pub mod page;
pub mod role;

pub use alert::AlertSeverity;
pub use page::{PageId, PageRef, PageSummary, SelectedPage};
pub use role::{Capabilities, PageRole};
