pub mod action;
pub mod event;
pub mod handler;
pub mod state;
