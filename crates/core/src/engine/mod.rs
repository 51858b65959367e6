pub mod builder;
pub mod renderer;

pub use builder::TreeBuilder;
pub use renderer::Renderer;
