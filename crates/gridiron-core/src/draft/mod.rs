pub mod order;
pub mod pick;
pub mod roster;
pub mod simulator;
