mod render;
mod service;

pub use render::RenderViewQuery;
pub use service::ViewQueryService;
