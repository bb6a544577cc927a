pub mod dialect;
pub mod expr;
pub mod filter;
pub mod renderer;
pub mod sink;

pub use expr::{FilterExpr, Operand, Predicate};
pub use filter::FilterQuery;
pub use sink::PredicateSink;
