//! The rule-tree interpreter.

pub mod coercer;
pub mod emitter;
pub mod params;
pub mod stage;
pub mod translator;
pub mod validator;

pub use coercer::{CoercedValue, Coercer, ValueType};
pub use emitter::emit;
pub use translator::RuleTranslator;
pub use validator::{Rule, is_rule_correct, validate_rule};
