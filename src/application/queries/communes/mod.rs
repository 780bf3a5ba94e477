mod ensure_slug;
mod resolve;
mod service;

pub use resolve::ResolveCommuneQuery;
pub use service::CommuneQueryService;
