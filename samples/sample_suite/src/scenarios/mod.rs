pub mod member;
pub mod relationships;
