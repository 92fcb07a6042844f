pub mod help;
pub mod main_flow;
