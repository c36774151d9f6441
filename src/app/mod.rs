pub mod controller;

pub use controller::StateController;
