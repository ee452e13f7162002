pub mod excel_read;
pub mod sql_write;
