pub mod address;
pub mod hash;
pub mod keys;
pub mod signature;
