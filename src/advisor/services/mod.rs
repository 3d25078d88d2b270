//! Orchestration services for the advisor context.

mod advisor;
mod render;

pub use advisor::AdvisorService;
pub use render::ReplyRenderer;
