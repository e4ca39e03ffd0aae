mod expander;
mod model;
mod resolver;

pub use expander::PathExpander;
pub use model::PathModel;
pub use resolver::{is_executable, PathResolver, ResolveError, SearchPath};
