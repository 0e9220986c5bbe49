mod value;
pub use value::*;

mod struct_;
pub use struct_::*;
