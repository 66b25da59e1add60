pub mod goal_service;
pub mod record_service;

pub use goal_service::{GoalService, GoalServiceImpl};
pub use record_service::{RecordService, RecordServiceImpl, ServiceError};

use crate::models::{Budget, Category, Expense, Income, RecurringBill};

pub type CategoryService = dyn RecordService<Category>;
pub type IncomeService = dyn RecordService<Income>;
pub type ExpenseService = dyn RecordService<Expense>;
pub type RecurringBillService = dyn RecordService<RecurringBill>;
pub type BudgetService = dyn RecordService<Budget>;
