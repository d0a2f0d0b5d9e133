pub mod era;
pub mod place;
pub mod time;
