pub mod notification;
pub mod preference;
pub mod service;
