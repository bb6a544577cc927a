pub mod allow_list;
pub mod condition;
pub mod node;

pub use allow_list::FieldAllowList;
pub use condition::Connective;
pub use node::{RawRule, RuleGroup, RuleNode};
