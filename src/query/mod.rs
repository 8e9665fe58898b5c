mod fields;
mod filters;
mod ops;
mod parser;

pub use fields::{GameField, ValueKind};
pub use filters::filter;
pub use ops::CmpOp;
pub use parser::{parse_clause, Clause};
