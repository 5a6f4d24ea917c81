pub mod spin;
pub mod tone;
pub mod wheel;
pub mod words;

pub use spin::*;
pub use tone::*;
pub use wheel::*;
pub use words::*;
