mod collection;
mod media_item;

pub use collection::CollectionInfo;
pub use media_item::{MediaItem, MediaType};
