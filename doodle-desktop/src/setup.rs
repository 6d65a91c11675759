use std::fs;
use crate::config_gen;

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use env_logger::{Builder, Target};
use doodle_core::config::SystemConfig;

pub const CONFIG_PATH: &str = "config.toml";

pub fn init() {
    config_gen::ensure_config_exists(CONFIG_PATH);

    if let Err(e) = doodle_shared::config::init(CONFIG_PATH) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger();
}

// 动画占用 stdout，日志走 stderr + 文件
fn init_logger() {
    let sys_cfg: SystemConfig = doodle_shared::config::get("system");
    if let Err(e) = fs::create_dir_all(&sys_cfg.log_path) {
        eprintln!("Failed to create log dir: {}", e);
    }

    let log_file_path = std::path::Path::new(&sys_cfg.log_path).join("doodle.log");

    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level));

    match OpenOptions::new().create(true).append(true).open(&log_file_path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(LogSink { file })));
        }
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}, logging to stderr only.", log_file_path, e);
            builder.target(Target::Stderr);
        }
    }

    builder.init();
}

/// Every record goes to stderr first; the file copy is best effort.
struct LogSink {
    file: File,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = io::stderr().lock().write(buf)?;
        if let Err(e) = self.file.write_all(&buf[..n]) {
            eprintln!("doodle.log write failed: {}", e);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::LogSink;
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    #[test]
    fn log_sink_copies_records_to_file() {
        let path = std::env::temp_dir().join(format!("doodle-sink-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);

        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();
        let mut sink = LogSink { file };
        writeln!(sink, "INFO stage 'draw' at 200ms").unwrap();
        sink.flush().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "INFO stage 'draw' at 200ms\n");
        let _ = fs::remove_file(&path);
    }
}
