pub mod load_state;
pub mod resource;
