mod source;
mod tokenizer;

pub use source::{BoundedReader, EditorSource, LineSource, LINE_MAX};
pub use tokenizer::{tokenize, Tokens};
