// bcg-core/src/infrastructure/adapters/mod.rs

pub mod workbook_reader;
pub mod workbook_writer;

pub use workbook_reader::CalamineInventorySource;
pub use workbook_writer::XlsxPublishSink;
