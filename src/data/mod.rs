pub mod export;
pub mod mapping;
pub mod store;
pub mod trace_look;
pub mod traces;
