pub mod class;
pub mod expr;
pub mod name;
pub mod receiver;
pub mod symbol;
pub mod types;

pub use class::*;
pub use expr::*;
pub use name::*;
pub use receiver::*;
pub use symbol::*;
pub use types::*;
