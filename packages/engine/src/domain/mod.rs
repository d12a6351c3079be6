//! Domain - actor/stage configuration and the shape capability layer

pub mod config;
pub mod draw;
pub mod shapes;

pub use config::{ActorConfig, StageSettings};
pub use draw::DrawCommand;
pub use shapes::{build_shape, DegenerateShape, Shape, ShapeBody, ShapeKind};
