//! Add Customer command implementation.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::{
    CUSTOMER_ADDRESS, CUSTOMER_FIRST_NAME, CUSTOMER_LAST_NAME, CUSTOMER_ZIPCODE,
};
use flightdesk::entity::{Gender, NewCustomer};
use flightdesk::AddRecordPlan;

use crate::error::CliError;
use crate::session::Session;

/// Asks for a customer's details and inserts them.
///
/// Address, phone and zipcode may be left empty.
pub struct AddCustomerCommand;

impl AddCustomerCommand {
    /// Execute the add customer command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let prompter = &mut session.prompter;
        let first_name =
            prompter.read_text("Please enter the customer's first name: ", &CUSTOMER_FIRST_NAME)?;
        let last_name =
            prompter.read_text("Please enter the customer's last name: ", &CUSTOMER_LAST_NAME)?;
        let gender: Gender =
            prompter.read_code("gender", "Please enter the customer's gender (M or F): ")?;
        let date_of_birth = prompter.read_date("Please enter the customer's date of birth.")?;
        let address =
            prompter.read_text("Please enter the customer's address: ", &CUSTOMER_ADDRESS)?;
        let phone = prompter.read_phone("Please enter the customer's phone number: ")?;
        let zipcode =
            prompter.read_text("Please enter the customer's zipcode: ", &CUSTOMER_ZIPCODE)?;

        let customer = NewCustomer::new(
            first_name,
            last_name,
            gender,
            date_of_birth,
            address,
            phone,
            zipcode,
        )?;
        let plan =
            AddRecordPlan::new(customer).build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
