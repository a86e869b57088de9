pub mod addon;
pub mod playlist;

pub use addon::{CatalogRef, Manifest, MetaItem, StreamInfo};
pub use playlist::Channel;
