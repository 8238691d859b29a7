//! Content models

mod post;

pub use post::Language;
pub use post::ParseLanguageError;
pub use post::Post;
pub use post::PostPatch;
pub use post::Tag;
