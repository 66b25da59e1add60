use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::health_handlers::{HealthResponse, health_handler};
use crate::handlers::{
    ErrorResponse, MessageResponse, budget_handlers, category_handlers, expense_handlers,
    goal_handlers, income_handlers, recurring_bill_handlers,
};
use crate::models::{
    Budget, Category, Expense, Goal, Income, Record, RecurringBill, TransactionKind,
};
use crate::repositories::{InMemoryRepository, Repository, seed};
use crate::services::{
    BudgetService, CategoryService, ExpenseService, GoalService, GoalServiceImpl, IncomeService,
    RecordService, RecordServiceImpl, RecurringBillService,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handlers::health_handler,
        crate::handlers::category_handlers::list_categories_handler,
        crate::handlers::category_handlers::get_category_handler,
        crate::handlers::category_handlers::create_category_handler,
        crate::handlers::income_handlers::list_incomes_handler,
        crate::handlers::income_handlers::get_income_handler,
        crate::handlers::income_handlers::create_income_handler,
        crate::handlers::income_handlers::update_income_handler,
        crate::handlers::income_handlers::delete_income_handler,
        crate::handlers::expense_handlers::list_expenses_handler,
        crate::handlers::expense_handlers::get_expense_handler,
        crate::handlers::expense_handlers::create_expense_handler,
        crate::handlers::recurring_bill_handlers::list_recurring_bills_handler,
        crate::handlers::recurring_bill_handlers::get_recurring_bill_handler,
        crate::handlers::recurring_bill_handlers::create_recurring_bill_handler,
        crate::handlers::budget_handlers::list_budgets_handler,
        crate::handlers::budget_handlers::get_budget_handler,
        crate::handlers::budget_handlers::create_budget_handler,
        crate::handlers::budget_handlers::update_budget_handler,
        crate::handlers::budget_handlers::delete_budget_handler,
        crate::handlers::goal_handlers::list_goals_handler,
        crate::handlers::goal_handlers::get_goal_handler,
        crate::handlers::goal_handlers::create_goal_handler,
        crate::handlers::goal_handlers::update_goal_handler,
        crate::handlers::goal_handlers::add_goal_value_handler,
        crate::handlers::goal_handlers::delete_goal_handler,
    ),
    components(
        schemas(
            Category, TransactionKind, Income, Expense, RecurringBill, Budget, Goal,
            ErrorResponse, MessageResponse, HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "categorias", description = "Income and expense categories"),
        (name = "rendas", description = "Incomes"),
        (name = "despesas", description = "Expenses"),
        (name = "contas-recorrentes", description = "Recurring bills"),
        (name = "orcamentos", description = "Budgets"),
        (name = "metas", description = "Savings goals")
    ),
    info(
        title = "DuckBills API",
        version = "0.1.0",
        description = "REST API for personal finance bookkeeping",
    )
)]
pub struct ApiDoc;

/// One service per resource, each backed by its own store
#[derive(Clone)]
pub struct Services {
    pub categories: Arc<CategoryService>,
    pub incomes: Arc<IncomeService>,
    pub expenses: Arc<ExpenseService>,
    pub recurring_bills: Arc<RecurringBillService>,
    pub budgets: Arc<BudgetService>,
    pub goals: Arc<dyn GoalService>,
}

impl Services {
    /// In-memory services holding the fixture rows
    pub fn seeded() -> Self {
        Self::from_records(
            seed::categories(),
            seed::incomes(),
            seed::expenses(),
            seed::recurring_bills(),
            seed::budgets(),
            seed::goals(),
        )
    }

    /// In-memory services with every store empty
    pub fn empty() -> Self {
        Self::from_records(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    fn from_records(
        categories: Vec<Category>,
        incomes: Vec<Income>,
        expenses: Vec<Expense>,
        recurring_bills: Vec<RecurringBill>,
        budgets: Vec<Budget>,
        goals: Vec<Goal>,
    ) -> Self {
        let goal_repository: Arc<dyn Repository<Goal>> =
            Arc::new(InMemoryRepository::with_records(goals));

        Self {
            categories: record_service(categories),
            incomes: record_service(incomes),
            expenses: record_service(expenses),
            recurring_bills: record_service(recurring_bills),
            budgets: record_service(budgets),
            goals: Arc::new(GoalServiceImpl::new(goal_repository)),
        }
    }
}

fn record_service<T: Record>(records: Vec<T>) -> Arc<dyn RecordService<T>> {
    let repository: Arc<dyn Repository<T>> = Arc::new(InMemoryRepository::with_records(records));
    Arc::new(RecordServiceImpl::new(repository))
}

/// Build the full application router
pub fn build_app(services: Services) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_handler))
        // Resource routes
        .merge(category_handlers::routes(services.categories))
        .merge(income_handlers::routes(services.incomes))
        .merge(expense_handlers::routes(services.expenses))
        .merge(recurring_bill_handlers::routes(services.recurring_bills))
        .merge(budget_handlers::routes(services.budgets))
        .merge(goal_handlers::routes(services.goals))
        // Merge Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Any origin, method and header; credentials allowed
        .layer(CorsLayer::very_permissive())
}
