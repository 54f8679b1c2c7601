mod suid;

pub use suid::*;
