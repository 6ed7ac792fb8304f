pub mod events;
pub mod ride;
