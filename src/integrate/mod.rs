mod integrator;
mod rule;

pub use integrator::{integrate, Integrator, DEFAULT_STRIPS, DEGENERATE_WIDTH};
pub use rule::QuadratureRule;
