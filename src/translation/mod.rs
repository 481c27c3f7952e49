mod line;
mod program;
mod statics;

pub use line::{declared_static, LineTranslator, Rule, STRUCT_DERIVE, ZEROED};
pub use program::{translate, Translator};
pub use statics::{rewrite_references, wrapper, StaticRegistry};
