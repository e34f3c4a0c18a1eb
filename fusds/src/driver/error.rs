use derive_more::Display;
use derive_new::new;
use thiserror::Error;

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the driver.
pub struct DriverError {
    msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "Driver is not connected",
            DriverError::new("Driver is not connected".to_owned()).to_string()
        );
    }
}
