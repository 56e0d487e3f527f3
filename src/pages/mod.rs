// pages/mod.rs - Page components module

pub mod home;

pub use home::HomePage;
