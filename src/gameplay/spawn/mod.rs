pub mod add_trigger;
pub mod outline;
pub mod spawn;
