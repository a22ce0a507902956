use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const FALLBACK_DIRECTIVE: &str = "wallet_stats=info";

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{}", line);
}

/// Installs the global subscriber once. Later calls are ignored.
pub fn init_tracing(directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));

        // wasm32-unknown-unknown has no clock, so events carry no timestamp.
        let _ = fmt()
            .with_env_filter(filter)
            .without_time()
            .with_ansi(false)
            .with_writer(ConsoleWriter::default)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing("wallet_stats=debug");
        init_tracing("not a directive ===");
        tracing::info!("statistics tracing initialized");
    }

    #[test]
    fn writer_accepts_partial_writes() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"first ").unwrap();
        writer.write_all(b"second\n").unwrap();
        assert_eq!(writer.buf, b"first second\n");
    }
}
