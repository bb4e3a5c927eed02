pub mod creation;
pub mod template;
