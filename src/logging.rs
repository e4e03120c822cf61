use env_logger::Builder;
use log::{LevelFilter, Record};
use std::io;
use std::io::Write;

/// `[LEVEL module::path] message`
fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "[{:<5} {}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}

pub fn build_logger_for_level(level: LevelFilter) {
    Builder::from_default_env()
        .format(|buf, record| write_record(buf, record))
        .filter(None, level)
        .init();
}

/// Level taken from `RUST_LOG`.
pub fn build_logger() {
    Builder::from_default_env()
        .format(|buf, record| write_record(buf, record))
        .init();
}
