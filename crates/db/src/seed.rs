//! Loading of appointment seed files: a JSON array of
//! `{id, trainer_id, user_id, starts_at, ends_at}` records.

use std::path::Path;

use eyre::{Result, WrapErr};

use crate::models::SeedAppointment;

pub fn parse_seed(json: &str) -> Result<Vec<SeedAppointment>> {
    serde_json::from_str(json).wrap_err("Invalid appointment seed data")
}

pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SeedAppointment>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;

    let appointments = parse_seed(&contents)?;
    tracing::info!("Loaded {} appointments from {}", appointments.len(), path.display());
    Ok(appointments)
}
