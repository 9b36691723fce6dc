pub mod catalog;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod shops;
pub mod store;
pub mod submission;

pub use catalog::Catalog;
pub use config::Config;
pub use shops::{Barbershop, Feature, Geometry};
pub use submission::Submission;
