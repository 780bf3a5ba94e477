// src/application/commands/communes/mod.rs
mod register;
mod service;

pub use register::RegisterCommuneCommand;
pub use service::CommuneCommandService;
