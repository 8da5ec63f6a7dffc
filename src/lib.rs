pub mod console;
pub mod consts;
pub mod controller;
pub mod database;
pub mod model;
