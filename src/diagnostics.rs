use serde::Serialize;
use std::fmt;

/// A non-fatal problem met while extracting a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub section: &'static str,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.section, self.message)
    }
}

/// An extracted value together with the warnings collected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Parsed<T> {
    pub fn new(value: T) -> Self {
        Parsed {
            value,
            warnings: Vec::new(),
        }
    }

    /// Records a warning and forwards it to the log.
    pub fn warn(&mut self, section: &'static str, message: impl Into<String>) {
        let warning = Warning {
            section,
            message: message.into(),
        };
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Takes over the warnings of `other` and returns its value.
    pub fn absorb<U>(&mut self, other: Parsed<U>) -> U {
        self.warnings.extend(other.warnings);
        other.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }
}
