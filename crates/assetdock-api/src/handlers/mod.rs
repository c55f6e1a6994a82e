pub mod asset_list;
pub mod asset_upload;
pub mod health;
