pub mod order_reader;
pub mod payload_writer;
