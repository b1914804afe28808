pub mod action;
pub mod board;
pub mod card;
pub mod changetracker;
pub mod client;
pub mod error;
pub mod filter;
pub mod httptransport;
pub mod member;
pub mod mocktransport;
pub mod notification;
pub mod organization;
pub mod record;
pub mod relationship;
pub mod resource;
pub mod schema;
pub mod transport;
pub mod value;
