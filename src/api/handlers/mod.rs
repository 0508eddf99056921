pub mod agent;
pub mod readings;
