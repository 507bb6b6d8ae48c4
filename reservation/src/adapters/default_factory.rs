use crate::domain::entities::Customer;
use crate::domain::ports::CustomerFactory;

/// Factory that builds a blank customer with `Customer::new`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCustomerFactory;

impl CustomerFactory for DefaultCustomerFactory {
    fn new_customer(&self) -> Customer {
        Customer::new()
    }
}
