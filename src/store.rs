use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::structs::{Customer, EntryKind, StatementEntry};

/// Process-wide account store. Everything lives in memory and is discarded
/// when the process exits.
#[derive(Default)]
pub struct Bank {
    customers: RwLock<Vec<Customer>>,
}

/// Running total of credits minus debits over a full statement.
pub fn balance(statement: &[StatementEntry]) -> f64 {
    statement.iter().fold(0.0, |acc, entry| match entry.kind {
        EntryKind::Credit => acc + entry.amount,
        EntryKind::Debit => acc - entry.amount,
    })
}

fn entries_on(statement: &[StatementEntry], day: NaiveDate) -> Vec<StatementEntry> {
    statement
        .iter()
        .filter(|entry| entry.created_at.date_naive() == day)
        .cloned()
        .collect()
}

fn find<'a>(customers: &'a [Customer], cpf: &str) -> Result<&'a Customer, ApiError> {
    customers
        .iter()
        .find(|customer| customer.cpf == cpf)
        .ok_or(ApiError::CustomerNotFound)
}

fn find_mut<'a>(customers: &'a mut [Customer], cpf: &str) -> Result<&'a mut Customer, ApiError> {
    customers
        .iter_mut()
        .find(|customer| customer.cpf == cpf)
        .ok_or(ApiError::CustomerNotFound)
}

impl Bank {
    /// Register a new customer with an empty statement. The returned
    /// (empty) statement is the creation confirmation sent to the caller.
    pub fn create_account(
        &self,
        cpf: String,
        name: String,
    ) -> Result<Vec<StatementEntry>, ApiError> {
        let mut customers = self.customers.write().unwrap();

        if customers.iter().any(|customer| customer.cpf == cpf) {
            return Err(ApiError::DuplicateCustomer);
        }

        tracing::info!(%cpf, "account created");

        customers.push(Customer {
            id: Uuid::new_v4(),
            cpf,
            name,
            statement: Vec::new(),
        });

        Ok(Vec::new())
    }

    pub fn statement(&self, cpf: &str) -> Result<Vec<StatementEntry>, ApiError> {
        let customers = self.customers.read().unwrap();
        let customer = find(&customers, cpf)?;

        Ok(customer.statement.clone())
    }

    /// Statement entries whose `created_at` falls on the given UTC calendar
    /// day. The customer must resolve before the date is validated; an
    /// unparseable date matches nothing.
    pub fn statement_by_date(
        &self,
        cpf: &str,
        date: Option<&str>,
    ) -> Result<Vec<StatementEntry>, ApiError> {
        let customers = self.customers.read().unwrap();
        let customer = find(&customers, cpf)?;

        let date = date.ok_or(ApiError::MissingDate)?;
        let day = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(day) => day,
            Err(_) => return Ok(Vec::new()),
        };

        Ok(entries_on(&customer.statement, day))
    }

    pub fn deposit(
        &self,
        cpf: &str,
        description: Option<String>,
        amount: f64,
    ) -> Result<StatementEntry, ApiError> {
        let mut customers = self.customers.write().unwrap();
        let customer = find_mut(&mut customers, cpf)?;

        let entry = StatementEntry {
            kind: EntryKind::Credit,
            amount,
            description,
            created_at: Utc::now(),
        };

        tracing::debug!(%cpf, amount, "deposit");
        customer.statement.push(entry.clone());

        Ok(entry)
    }

    /// Append a debit entry, unless it would push the balance below zero.
    /// The balance check and the append happen under one write lock, so two
    /// racing withdrawals cannot both pass the check.
    pub fn withdraw(&self, cpf: &str, amount: f64) -> Result<StatementEntry, ApiError> {
        let mut customers = self.customers.write().unwrap();
        let customer = find_mut(&mut customers, cpf)?;

        if balance(&customer.statement) < amount {
            return Err(ApiError::InsufficientFunds);
        }

        let entry = StatementEntry {
            kind: EntryKind::Debit,
            amount,
            description: None,
            created_at: Utc::now(),
        };

        tracing::debug!(%cpf, amount, "withdrawal");
        customer.statement.push(entry.clone());

        Ok(entry)
    }

    pub fn rename(&self, cpf: &str, name: String) -> Result<Customer, ApiError> {
        let mut customers = self.customers.write().unwrap();
        let customer = find_mut(&mut customers, cpf)?;

        customer.name = name;

        Ok(customer.clone())
    }
}
