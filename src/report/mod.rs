pub mod issue;
pub mod json;
pub mod normalize;
pub mod terminal;
