use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Reference;
use crate::state::ReferenceTable;
use crate::tracker::constants::{FUZZY_MATCH_THRESHOLD, MAX_FUZZY_CANDIDATES};
use crate::tracker::Mood;

/// Names that fuzzily match `input`, best first.
pub fn fuzzy_candidates<'a>(names: &[&'a str], input: &str) -> Vec<&'a str> {
    let wanted = input.trim().to_lowercase();

    let mut scored: Vec<(&str, f64)> = names
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_FUZZY_CANDIDATES)
        .map(|(name, _)| name)
        .collect()
}

/// Ask for an item from a reference table, with fuzzy matching.
///
/// Returns `None` when the user enters nothing or rejects every suggestion.
pub fn prompt_reference<R: Reference>(
    table: &ReferenceTable<R>,
    what: &str,
) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!("Enter a {} (or press Enter to cancel)", what))
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Exact match first (case-insensitive)
    if let Some(item) = table.get(input) {
        return Ok(Some(item.name().to_string()));
    }

    let names = table.names();
    let candidates = fuzzy_candidates(&names, input);

    match candidates.as_slice() {
        [] => {
            println!("No matching {} found for '{}'", what, input);
            Ok(None)
        }
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.to_string()))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|n| n.to_string()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < many.len()).then(|| many[selection].to_string()))
        }
    }
}

/// Ask for a raw form field; validation is left to the caller.
pub fn prompt_field(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Ask for a mood from the recognized set.
pub fn prompt_mood() -> Result<Mood> {
    let options: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();

    let selection = Select::new()
        .with_prompt("How are you feeling today?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Mood::ALL[selection])
}

/// Ask the user to pick one of several actions.
pub fn prompt_menu(prompt: &str, options: &[&str]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
