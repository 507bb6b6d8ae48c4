//! Customer manager
//!
//! Looks customers up through the injected `CustomerDao` and creates new
//! ones through the injected `CustomerFactory`.

use std::sync::Arc;

use crate::adapters::DefaultCustomerFactory;
use crate::domain::entities::Customer;
use crate::domain::ports::{CustomerDao, CustomerFactory};
use crate::error::AppError;

/// Service for looking up and creating customers
pub struct CustomerManager<D, F>
where
    D: CustomerDao,
    F: CustomerFactory,
{
    dao: Arc<D>,
    factory: Arc<F>,
}

impl<D> CustomerManager<D, DefaultCustomerFactory>
where
    D: CustomerDao,
{
    /// Manager backed by `dao` that builds blank customers
    pub fn create_instance(dao: Arc<D>) -> Self {
        Self::new(dao, Arc::new(DefaultCustomerFactory))
    }
}

impl<D, F> CustomerManager<D, F>
where
    D: CustomerDao,
    F: CustomerFactory,
{
    pub fn new(dao: Arc<D>, factory: Arc<F>) -> Self {
        Self { dao, factory }
    }

    /// Same manager, building customers through `factory` instead
    pub fn with_factory<G>(self, factory: Arc<G>) -> CustomerManager<D, G>
    where
        G: CustomerFactory,
    {
        CustomerManager {
            dao: self.dao,
            factory,
        }
    }

    /// Look a customer up by first name
    ///
    /// The name is forwarded to the DAO exactly as given. Blank names are
    /// rejected without touching the DAO.
    pub async fn get_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Option<Customer>, AppError> {
        if first_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First name must not be blank".to_string(),
            ));
        }

        tracing::debug!(first_name, "Looking up customer");

        let customer = self.dao.find_by_first_name(first_name).await?;

        match &customer {
            Some(c) => tracing::info!("Customer: {}", c),
            None => tracing::debug!(first_name, "No customer found"),
        }

        Ok(customer)
    }

    /// Create a new, unsaved customer
    pub fn create_new_customer(&self) -> Customer {
        let customer = self.factory.new_customer();
        tracing::debug!("Created customer: {}", customer);
        customer
    }
}
