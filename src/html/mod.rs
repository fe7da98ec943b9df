#[macro_use]
mod tag;

mod local_name_hash;
mod tag_class;

pub use self::local_name_hash::LocalNameHash;
pub use self::tag::Tag;
pub use self::tag_class::{is_boolean_attribute, TagClass};
