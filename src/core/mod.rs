pub mod aggregate;
pub mod book;
pub mod logic;
pub mod ranking;

pub use aggregate::DepartmentAggregate;
pub use book::ExceptionBook;
pub use logic::Core;
pub use ranking::{DepartmentRanker, RowRanker};
