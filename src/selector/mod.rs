pub mod area_selector;
pub mod config;
pub mod effect;
pub mod error;
pub mod event;
pub mod machine;
pub mod state;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;
