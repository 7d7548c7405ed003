use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::Roster;
use crate::domain::vacancy::weekly_calendar::WeeklyCalendar;
use crate::error::Result;

/// One CSV row per vacancy block.
#[derive(Debug, Serialize)]
struct BlockRow<'a> {
    day: usize,
    weekday: &'a str,
    vacancy: usize,
    lane: usize,
    hour: u8,
    /// Empty when the block is unfilled.
    employee: &'a str,
}

/// Writes every block of the calendar as CSV, in scheduling order.
pub fn write_csv<W: Write>(calendar: &WeeklyCalendar, roster: &Roster, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for day in Day::week() {
        for (vacancy_index, vacancy) in calendar.vacancies(day).iter().enumerate() {
            for lane in 0..vacancy.capacity() {
                for hour in vacancy.start_time()..vacancy.end_time() {
                    let employee = vacancy.block_at(hour, lane).and_then(|block| block.employee()).and_then(|id| roster.name_of(id)).map(|name| name.as_str());

                    csv_writer.serialize(BlockRow { day: day.index(), weekday: day.name(), vacancy: vacancy_index, lane, hour, employee: employee.unwrap_or("") })?;
                }
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(file_path: &str, calendar: &WeeklyCalendar, roster: &Roster) -> Result<()> {
    let file = File::create(file_path)?;
    write_csv(calendar, roster, BufWriter::new(file))?;
    log::info!("Schedule exported as CSV to '{}'.", file_path);
    Ok(())
}

pub fn write_json_file<T: Serialize>(file_path: &str, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    log::info!("Schedule exported as JSON to '{}'.", file_path);
    Ok(())
}
