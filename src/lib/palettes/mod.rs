pub(crate) mod cls;
pub(crate) mod hex;
pub(crate) mod json;
pub mod palette;
