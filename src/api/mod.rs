pub mod schedule_input_dto;
pub mod schedule_output_dto;
