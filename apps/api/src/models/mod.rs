pub mod analysis;
pub mod document;
pub mod industry;
pub mod keyword;
