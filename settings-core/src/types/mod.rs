mod shape;
pub use shape::*;

mod field;
pub use field::*;

mod option;
pub use option::*;
