mod sink;
pub use sink::*;

mod obj;
pub use obj::*;

mod trailer;
pub use trailer::*;

mod xref;
pub use xref::*;
