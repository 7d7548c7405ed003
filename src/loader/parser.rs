use serde::de::DeserializeOwned;
use std::fs;

use crate::api::schedule_input_dto::ScheduleInputDto;
use crate::domain::schedule_input::ScheduleInput;
use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    parse_json_str(&data)
}

pub fn parse_json_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    Ok(serde_json::from_str(data)?)
}

/// Reads a schedule input document and validates it into a [`ScheduleInput`].
pub fn load_schedule_input(file_path: &str) -> Result<ScheduleInput> {
    let dto: ScheduleInputDto = parse_json_file(file_path)?;
    log::info!("Schedule input '{}' parsed successfully.", file_path);

    ScheduleInput::try_from(dto)
}
