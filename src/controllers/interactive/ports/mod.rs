//! Interfaces between the controller and the presentation layer.

pub mod presenter;
