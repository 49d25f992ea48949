//! Rule composition.
//!
//! - [`And`] chains two statically known rules.
//! - [`Rules`] holds a dynamically assembled, ordered list.
//! - [`rule_fn`] adapts a closure.
//!
//! All of them stop at the first failing rule.

pub mod and;
pub mod func;
pub mod rules;

pub use and::{And, and};
pub use func::{FnRule, rule_fn};
pub use rules::Rules;
