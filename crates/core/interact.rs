use dialoguer::Input;
use eyre::{eyre, Context, Result};
use shelf::record::IssueDetails;

pub fn user_input(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::<String>::new();
    input.with_prompt(prompt).allow_empty(true);

    if let Some(default) = default {
        input.default(default.to_owned());
    }

    let value = input
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))?;

    Ok(non_empty(value))
}

/// Ask for the details of the issue being added, offering any values already given as defaults.
pub fn user_issue_details(title: &str, defaults: &IssueDetails) -> Result<IssueDetails> {
    println!("Please enter the details of the current item of '{title}', entering N/A if not applicable");

    Ok(IssueDetails {
        year: user_input("Year item was published", defaults.year.as_deref())?,
        month: user_input("Month item was published", defaults.month.as_deref())?,
        volume: user_input("Item volume", defaults.volume.as_deref())?,
        issue: user_input("Item number", defaults.issue.as_deref())?,
    })
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}
