pub mod pagination;
pub mod serde_ext;
pub mod status;

pub use serde_ext::Metadata;
