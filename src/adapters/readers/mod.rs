pub mod line_file_reader;
