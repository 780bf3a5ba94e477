pub mod communes;

pub use communes::CommuneDto;
