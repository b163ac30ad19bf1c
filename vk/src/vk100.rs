mod _enum;
pub use _enum::*;

mod define;
pub use define::*;

mod functions;
pub use functions::*;
