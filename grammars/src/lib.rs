// Public modules so scour-core can use them
pub mod dates;
pub mod fold;
pub mod numbers;
pub mod restricted;
pub mod types;

pub use dates::{lookup as lookup_date_grammar, require as require_date_grammar, GrammarError};
pub use types::{
    CompareMode, DateGrammar, DateKind, Delimiter, GrammarKey, NumberConvention, Region,
    SeparatorStyle,
};
