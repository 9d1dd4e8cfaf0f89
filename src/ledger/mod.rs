//! Category ledgers, the records they hold, and the budget that groups them.

pub mod budget;
pub mod category;
pub mod common;
pub mod record;

pub use budget::Budget;
pub use category::Category;
pub use common::{Balanced, NamedEntity};
pub use record::Record;
