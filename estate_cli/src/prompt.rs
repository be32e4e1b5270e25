//! Interactive input: one prompt per field, Enter keeps the shown default.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use estate_core::{CalcError, EstateInput, Gender, ParentsStatus};

/// Ask for a value; empty input keeps `default`, an unparsable answer is an error.
fn prompt_value<T, R, W>(reader: &mut R, writer: &mut W, prompt: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt} [{default}]: ").context("writing prompt")?;
    writer.flush().context("flushing prompt")?;

    let mut line = String::new();
    if reader.read_line(&mut line).context("reading answer")? == 0 {
        return Ok(default);
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    match answer.parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(CalcError::invalid_input(prompt, answer, "Answer is not a valid value").into()),
    }
}

/// Ask for one of a fixed set of codes, case-insensitively.
fn prompt_choice<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    default: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    let answer: String = prompt_value(reader, writer, prompt, default.to_string())?;
    match parse(&answer.to_ascii_lowercase()) {
        Some(value) => Ok(value),
        None => Err(CalcError::invalid_input(prompt, answer, "Answer is not one of the listed options").into()),
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str, default: bool) -> Result<bool> {
    let shown = if default { "y" } else { "n" };
    prompt_choice(reader, writer, prompt, shown, |answer| match answer {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    })
}

fn gender_code(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

fn parents_code(status: ParentsStatus) -> &'static str {
    match status {
        ParentsStatus::Father => "father",
        ParentsStatus::Mother => "mother",
        ParentsStatus::Both => "both",
        ParentsStatus::None => "none",
    }
}

/// Walk through every field of `defaults`, returning the edited record.
pub fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, defaults: EstateInput) -> Result<EstateInput> {
    let total_assets = prompt_value(reader, writer, "Total assets", defaults.total_assets.value())?;
    let liabilities = prompt_value(
        reader,
        writer,
        "Financial liabilities",
        defaults.financial_liabilities.value(),
    )?;
    let debts = prompt_value(reader, writer, "Debt amount", defaults.debt_amount.value())?;
    let bequests = prompt_value(reader, writer, "Bequests amount", defaults.bequests_amount.value())?;
    let distributable = prompt_value(
        reader,
        writer,
        "Distributable estate",
        defaults.distributable_estate.value(),
    )?;

    let gender = prompt_choice(
        reader,
        writer,
        "Gender of the deceased (male/female)",
        gender_code(defaults.gender_deceased),
        |answer| match answer {
            "female" | "f" => Some(Gender::Female),
            "male" | "m" => Some(Gender::Male),
            _ => None,
        },
    )?;

    let has_spouse = prompt_yes_no(reader, writer, "Surviving spouse? (y/n)", defaults.has_spouse)?;

    let parents = prompt_choice(
        reader,
        writer,
        "Surviving parents (father/mother/both/none)",
        parents_code(defaults.parents_status),
        |answer| match answer {
            "father" => Some(ParentsStatus::Father),
            "mother" => Some(ParentsStatus::Mother),
            "both" => Some(ParentsStatus::Both),
            "none" => Some(ParentsStatus::None),
            _ => None,
        },
    )?;

    let sons = prompt_value(reader, writer, "Sons", defaults.sons)?;
    let daughters = prompt_value(reader, writer, "Daughters", defaults.daughters)?;
    let brothers = prompt_value(reader, writer, "Brothers", defaults.brothers)?;
    let sisters = prompt_value(reader, writer, "Sisters", defaults.sisters)?;

    Ok(defaults
        .with_total_assets(total_assets)
        .with_financial_liabilities(liabilities)
        .with_debt_amount(debts)
        .with_bequests_amount(bequests)
        .with_distributable_estate(distributable)
        .with_gender(gender)
        .with_spouse(has_spouse)
        .with_parents_status(parents)
        .with_sons(sons)
        .with_daughters(daughters)
        .with_brothers(brothers)
        .with_sisters(sisters))
}
