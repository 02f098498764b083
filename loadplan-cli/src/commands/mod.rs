pub mod check;
pub mod solve;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

pub(crate) fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

pub(crate) fn format_check_errors(errors: Vec<String>) -> String {
    format!("checker found {} errors:\n{}", errors.len(), errors.join("\n"))
}
