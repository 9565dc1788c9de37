pub mod client;
pub mod export;
pub mod overview;
pub mod render;
pub mod selection;

pub use crate::domain::model::ResourceKind;
pub use crate::domain::ports::{ConfigProvider, FormInput, Resource, ResourceSource, Storage};
pub use crate::utils::error::Result;
