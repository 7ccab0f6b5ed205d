pub mod enums;
pub mod pill;

pub use enums::*;
pub use pill::*;
