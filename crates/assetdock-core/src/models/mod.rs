pub mod asset;

pub use asset::{Asset, AssetResponse};
