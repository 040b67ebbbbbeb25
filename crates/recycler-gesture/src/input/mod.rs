pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId};
