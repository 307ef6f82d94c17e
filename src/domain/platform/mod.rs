pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPlatformLink, PlatformLink, PlatformStat};
pub use repository::{PlatformLinkRepository, PlatformRepository};
pub use value_objects::{Platform, PlatformId};
