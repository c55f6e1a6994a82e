//! API route constants.

/// Upload endpoint, fixed by the wire contract.
pub const UPLOAD_PATH: &str = "/api/assets/upload";

/// Asset listing endpoint.
pub const ASSETS_PATH: &str = "/api/assets";
