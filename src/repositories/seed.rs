//! Fixture rows every store starts with. State is never persisted, so a
//! restart always comes back to exactly these rows.

use chrono::NaiveDate;

use crate::models::{Budget, Category, Expense, Goal, Income, RecurringBill, TransactionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Salário".to_string(),
            kind: TransactionKind::Income,
        },
        Category {
            id: 2,
            name: "Aluguel".to_string(),
            kind: TransactionKind::Expense,
        },
    ]
}

pub fn incomes() -> Vec<Income> {
    vec![
        Income {
            id: 1,
            amount: 3000.0,
            date: date(2025, 9, 1),
            description: Some("Salário".to_string()),
            category_id: 1,
            user_id: 1,
        },
        Income {
            id: 2,
            amount: 200.0,
            date: date(2025, 9, 10),
            description: Some("Freelance".to_string()),
            category_id: 1,
            user_id: 1,
        },
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            amount: 100.0,
            date: date(2025, 9, 1),
            description: Some("Supermercado".to_string()),
            category_id: 2,
            user_id: 1,
            is_recurring: false,
        },
        Expense {
            id: 2,
            amount: 50.0,
            date: date(2025, 9, 5),
            description: Some("Transporte".to_string()),
            category_id: 2,
            user_id: 1,
            is_recurring: false,
        },
    ]
}

pub fn recurring_bills() -> Vec<RecurringBill> {
    vec![
        RecurringBill {
            id: 1,
            amount: 120.0,
            description: Some("Assinatura Streaming".to_string()),
            category_id: 2,
            user_id: 1,
            kind: TransactionKind::Expense,
            start_date: date(2025, 9, 1),
            frequency: "mensal".to_string(),
        },
        RecurringBill {
            id: 2,
            amount: 500.0,
            description: Some("Aluguel".to_string()),
            category_id: 2,
            user_id: 1,
            kind: TransactionKind::Expense,
            start_date: date(2025, 9, 1),
            frequency: "mensal".to_string(),
        },
    ]
}

pub fn budgets() -> Vec<Budget> {
    vec![
        Budget {
            id: 1,
            category_id: 2,
            user_id: 1,
            limit_amount: 1000.0,
            period: "mensal".to_string(),
        },
        Budget {
            id: 2,
            category_id: 1,
            user_id: 1,
            limit_amount: 5000.0,
            period: "anual".to_string(),
        },
    ]
}

pub fn goals() -> Vec<Goal> {
    let goal = |id, title: &str, current_amount, target_amount, deadline, description: &str| Goal {
        id,
        title: title.to_string(),
        current_amount,
        target_amount,
        deadline,
        description: Some(description.to_string()),
        user_id: 1,
    };

    vec![
        goal(1, "Viagem para a Europa", 7500.0, 20000.0, date(2026, 6, 1), "Viagem de 3 semanas pela Europa"),
        goal(2, "Macbook Pro Novo", 3200.0, 15000.0, date(2025, 12, 31), "Novo laptop para trabalho"),
        goal(3, "Reserva de Emergência", 12000.0, 18000.0, date(2025, 12, 31), "6 meses de gastos essenciais"),
        goal(4, "Curso de Especialização", 800.0, 5000.0, date(2025, 11, 1), "MBA em Gestão de Projetos"),
    ]
}
