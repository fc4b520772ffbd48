use crate::config::toml_config::RosterConfig;
use crate::config::Command;
use crate::core::greeting::greet_to;
use crate::core::math::checked_add;
use crate::domain::model::Person;
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Executes one CLI command, writing every output line to `sink`.
pub fn run<S: LineSink + ?Sized>(command: &Command, sink: &mut S) -> Result<()> {
    match command {
        Command::Greet { name } => {
            let status = greet_to(sink, name)?;
            sink.write_line(status)
        }
        Command::Add { a, b } => {
            let sum = checked_add(*a, *b)?;
            tracing::debug!("{} + {} = {}", a, b, sum);
            sink.write_line(&sum.to_string())
        }
        Command::Person { name, age, json } => {
            let person = Person::try_new(name.as_str(), *age)?;
            person.say_hello_to(sink)?;
            write_details(&person, *json, sink)
        }
        Command::Roster { config } => {
            tracing::info!("📁 Loading roster from: {}", config);
            let roster = RosterConfig::from_file(config)?;
            run_roster(&roster, sink)
        }
    }
}

pub fn run_roster<S: LineSink + ?Sized>(roster: &RosterConfig, sink: &mut S) -> Result<()> {
    roster.validate()?;
    tracing::info!(
        "✅ Roster '{}' loaded with {} people",
        roster.roster.name,
        roster.people.len()
    );

    for person in &roster.people {
        greet_to(sink, &person.name)?;
        if !roster.greeting_only() {
            write_details(person, true, sink)?;
        }
    }

    Ok(())
}

fn write_details<S: LineSink + ?Sized>(person: &Person, json: bool, sink: &mut S) -> Result<()> {
    let details = person.details();
    let line = if json {
        serde_json::to_string(&details)?
    } else {
        format!(
            "name: {}, age: {}, adult: {}",
            details.name, details.age, details.adult
        )
    };
    sink.write_line(&line)
}
