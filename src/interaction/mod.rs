pub mod mouse_constraint;
pub mod session;
