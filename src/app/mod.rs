pub mod controller;
pub mod runtime;
pub mod view;

pub use controller::{Effect, PortfolioApp};
pub use runtime::{Runtime, RuntimeHandle};
pub use view::Frame;
