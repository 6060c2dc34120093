pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod handler;
pub mod middleware;
pub mod repository;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;
