use std::fmt;
use std::str::FromStr;

use crate::{NrxError, Result};

/// NAVTEX message identifier `B1B2B3B4`
///
/// `B1` is the transmitter coverage area, `B2` the subject indicator and
/// `B3B4` a two digit serial number.
///
/// # Example
///
/// ```
/// use navtex_nrx::MessageCode;
///
/// let code: MessageCode = "UA98".parse().unwrap();
/// assert_eq!(code.coverage_area(), 'U');
/// assert_eq!(code.subject(), 'A');
/// assert_eq!(code.serial(), 98);
/// assert_eq!(MessageCode::new('U', 'A', 7).unwrap().to_string(), "UA07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageCode {
    coverage_area: char,
    subject: char,
    serial: u8,
}

impl MessageCode {
    /// Create a message code
    ///
    /// # Errors
    /// [`NrxError::InvalidArgument`] if area or subject are not ASCII
    /// uppercase letters or the serial is above 99.
    pub fn new(coverage_area: char, subject: char, serial: u8) -> Result<Self> {
        if !coverage_area.is_ascii_uppercase() {
            return Err(NrxError::InvalidArgument(format!(
                "Coverage area must be a letter A-Z, got {:?}",
                coverage_area
            )));
        }
        if !subject.is_ascii_uppercase() {
            return Err(NrxError::InvalidArgument(format!(
                "Subject indicator must be a letter A-Z, got {:?}",
                subject
            )));
        }
        if serial > 99 {
            return Err(NrxError::InvalidArgument(format!(
                "Serial number need to be from 0 to 99, got {}",
                serial
            )));
        }
        Ok(Self {
            coverage_area,
            subject,
            serial,
        })
    }

    pub fn coverage_area(&self) -> char {
        self.coverage_area
    }

    pub fn subject(&self) -> char {
        self.subject
    }

    pub fn serial(&self) -> u8 {
        self.serial
    }
}

impl FromStr for MessageCode {
    type Err = NrxError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NrxError::Parse(format!("Invalid NAVTEX message code '{}'", s));

        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
            return Err(invalid());
        }
        let serial = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');
        Self::new(bytes[0] as char, bytes[1] as char, serial).map_err(|_| invalid())
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{:02}", self.coverage_area, self.subject, self.serial)
    }
}
