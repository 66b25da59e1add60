pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod income;
pub mod record;
pub mod recurring_bill;

pub use budget::Budget;
pub use category::{Category, TransactionKind};
pub use expense::Expense;
pub use goal::{AddValueQuery, Goal};
pub use income::Income;
pub use record::{IdPolicy, Record};
pub use recurring_bill::RecurringBill;
