pub mod fundamentals;
pub mod macros;
pub mod quotes;

pub mod util;
