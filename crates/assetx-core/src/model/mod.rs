pub mod asset;
pub mod record;

pub use asset::Asset;
pub use record::{decode_record, encode_record};
