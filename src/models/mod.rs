// src/models/mod.rs

pub mod actor;

pub use actor::ActorRoute;
