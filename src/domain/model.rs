use crate::domain::ports::{LineSink, StdoutSink};
use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// Age from which a person counts as an adult (inclusive).
pub const ADULT_AGE: i64 = 18;

/// A named individual with an age.
///
/// `Person::new` stores both fields as given. Use `Person::try_new` when the
/// name must be non-empty and the age non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

/// Snapshot returned by `Person::details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub age: i64,
    pub adult: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn try_new(name: impl Into<String>, age: i64) -> Result<Self> {
        let person = Self::new(name, age);
        person.validate()?;
        Ok(person)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn introduction(&self) -> String {
        format!("My name is {} and I am {} years old.", self.name, self.age)
    }

    /// Prints the introduction to stdout. Write failures are logged, not returned.
    pub fn say_hello(&self) {
        if let Err(e) = self.say_hello_to(&mut StdoutSink) {
            tracing::warn!("Failed to write introduction for {}: {}", self.name, e);
        }
    }

    pub fn say_hello_to<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        tracing::debug!(name = %self.name, age = self.age, "say_hello");
        sink.write_line(&self.introduction())
    }

    pub fn details(&self) -> PersonDetails {
        PersonDetails {
            name: self.name.clone(),
            age: self.age,
            adult: self.is_adult(),
        }
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_min("age", self.age, 0)?;
        Ok(())
    }
}
