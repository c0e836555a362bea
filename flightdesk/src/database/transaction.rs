//! Transaction management utilities.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Runs `work` inside one immediate transaction.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back when
    /// it returns an error, so either every statement issued by `work` is
    /// applied or none is.
    ///
    /// # Errors
    ///
    /// Returns the error from `work`, or a database error if the
    /// transaction cannot be started or committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flightdesk::database::{Database, DatabaseConfig};
    /// use flightdesk::entity::NewTechnician;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/airline.db")).unwrap();
    /// let tech = NewTechnician::new("Sam Ortiz").unwrap();
    /// db.with_transaction(|tx| Database::insert_technician(tx, 0, &tech)).unwrap();
    /// ```
    pub fn with_transaction<T, F>(&mut self, work: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        // dropping an uncommitted transaction rolls it back
        let value = work(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
