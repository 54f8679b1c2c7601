mod interface;
mod system_clock;
mod timestamp;

pub use interface::*;
pub use system_clock::*;
pub use timestamp::*;
