pub use self::links::{LinkError, LinkGenerator, PathLinkGenerator};
pub use self::memory_store::MemoryStore;
pub use self::object_ref::{ObjectRef, is_cluster_scoped, split_api_version};
pub use self::store::{Key, ObjectStore, StoreError};

pub mod utils;

mod links;
mod memory_store;
mod object_ref;
mod store;
