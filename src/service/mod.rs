pub mod data_loop;
pub mod reader;
pub mod state;

pub use state::SharedState;
