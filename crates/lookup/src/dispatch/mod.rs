//! Input validation and race dispatch.
//!
//! The dispatcher is the only caller of the coordinator. It validates the raw
//! positional arguments synchronously, so malformed input never reaches a
//! provider.

use log::debug;

use crate::errors::{DispatchError, InputError};
use crate::models::PostalCode;
use crate::race::{RaceCoordinator, RaceWinner};

pub struct Dispatcher {
    coordinator: RaceCoordinator,
}

impl Dispatcher {
    pub fn new(coordinator: RaceCoordinator) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &RaceCoordinator {
        &self.coordinator
    }

    /// Validate positional arguments into a lookup key.
    ///
    /// Exactly one argument is accepted and it must contain the separator.
    pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<PostalCode, InputError> {
        match args {
            [] => Err(InputError::MissingPostalCode),
            [raw] => PostalCode::parse(raw.as_ref()),
            _ => Err(InputError::TooManyArguments(args.len())),
        }
    }

    /// Validate `args` and run a single race.
    pub async fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Result<RaceWinner, DispatchError> {
        let key = Self::parse_args(args)?;
        debug!("Dispatching lookup for {}", key);
        Ok(self.coordinator.race(&key).await?)
    }
}
