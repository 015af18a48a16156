//! mutasi-core: transaction model and category rules for BCA mutasi statements

pub mod category;
pub mod transaction;

pub use category::{
    Category, FIRST_SALARY_THRESHOLD, apply_first_salary_override, assign_categories, categorize,
};
pub use transaction::{Direction, Statement, Transaction};
