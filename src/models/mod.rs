pub mod category;
pub mod departments;
pub mod row;

pub use category::ExceptionCategory;
pub use departments::DepartmentNames;
pub use row::{RowId, RowRecord};
