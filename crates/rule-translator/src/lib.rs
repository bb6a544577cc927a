//! Translates the JSON rule tree produced by a browser-side query builder
//! widget into parameterized predicates on a query object.
//!
//! ```
//! use rule_translator::{FieldAllowList, FilterQuery, RuleTranslator};
//!
//! let payload = r#"{"condition": "AND", "rules": [
//!     {"id": "age", "field": "age", "type": "integer", "input": "number",
//!      "operator": "greater", "value": 18}
//! ]}"#;
//!
//! let fields = FieldAllowList::new(["age"]);
//! let query = RuleTranslator::default()
//!     .translate(payload, FilterQuery::new(), Some(&fields))
//!     .unwrap();
//! assert_eq!(query.to_sql(), " WHERE age > :p0");
//! ```

pub mod config;
pub mod error;
pub mod operator;
pub mod query;
pub mod rule;
pub mod translate;
pub mod value;

pub use config::TranslatorSettings;
pub use error::{RenderError, RuleSkip, SettingsError, TranslateError};
pub use operator::{OperatorSpec, OperatorTable, SqlOperator};
pub use query::{FilterExpr, FilterQuery, PredicateSink};
pub use rule::{Connective, FieldAllowList};
pub use translate::RuleTranslator;
pub use value::Value;
