pub mod analytics;
pub mod cli;
pub mod database;
pub mod database_factory;
pub mod date_provider;
pub mod date_range;
pub mod error;
pub mod essay;
pub mod mock_exam;
pub mod report;
pub mod report_service;
pub mod row_factories;
pub mod sample_data;
pub mod session;
pub mod subject;
pub mod time_format;
pub mod user;
