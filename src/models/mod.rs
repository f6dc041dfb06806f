pub mod fees;
pub mod money;
pub mod points;
pub mod price;

pub use fees::*;
pub use money::*;
pub use points::*;
pub use price::*;
