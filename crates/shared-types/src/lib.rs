pub mod error;
pub mod module_flags;

// Account and session types
pub mod models;

// School domain modules
pub mod attendance;
pub mod exam;
pub mod fees;
pub mod notice;
pub mod pagination;
pub mod student;

pub use error::*;
pub use module_flags::*;
pub use models::*;

pub use attendance::*;
pub use exam::*;
pub use fees::*;
pub use notice::*;
pub use pagination::*;
pub use student::*;
