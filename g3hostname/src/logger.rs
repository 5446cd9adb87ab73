/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io::{self, IsTerminal, Write};

use anstyle::{AnsiColor, Color, Style};
use chrono::Local;
use slog::{Drain, KV, Level, OwnedKVList, Record, Serializer, slog_o};
use slog_scope::GlobalLoggerGuard;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub(crate) fn setup(verbose_level: u8) -> Result<GlobalLoggerGuard, log::SetLoggerError> {
    let drain = StderrDrain::new(io::stderr().is_terminal());
    let logger = slog::Logger::root(drain.fuse(), slog_o!());

    let scope_guard = slog_scope::set_global_logger(logger);

    let log_level = match verbose_level {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };

    slog_stdlog::init_with_level(log_level)?;
    Ok(scope_guard)
}

#[derive(Default)]
struct KvCollector {
    pairs: Vec<(String, String)>,
}

impl Serializer for KvCollector {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.pairs.push((key.to_string(), val.to_string()));
        Ok(())
    }
}

struct StderrDrain {
    console: bool,
}

impl StderrDrain {
    fn new(console: bool) -> Self {
        StderrDrain { console }
    }

    fn collect_kv(record: &Record<'_>, values: &OwnedKVList) -> Vec<(String, String)> {
        let mut collector = KvCollector::default();
        let _ = record.kv().serialize(record, &mut collector);
        let _ = values.serialize(record, &mut collector);
        collector.pairs
    }

    /// Console output gets colours, plain output uses empty styles which
    /// render to nothing.
    fn write_line<IO: Write>(
        &self,
        io: &mut IO,
        record: &Record<'_>,
        kv_pairs: &[(String, String)],
    ) -> io::Result<()> {
        let (level, bold, italic) = if self.console {
            (level_style(record.level()), STYLE_BOLD, STYLE_ITALIC)
        } else {
            (Style::new(), Style::new(), Style::new())
        };
        let (bold_s, bold_e) = (bold.render(), bold.render_reset());

        write!(io, "{}", Local::now().format(TIME_FORMAT))?;
        write!(
            io,
            " {}{}{}",
            level.render(),
            record.level().as_short_str(),
            level.render_reset()
        )?;
        for (k, v) in kv_pairs {
            write!(io, " {bold_s}{k}{bold_e}: {v},")?;
        }
        write!(io, " {bold_s}{}{bold_e}", record.msg())?;
        write!(
            io,
            " <{}{}:{}{}>",
            italic.render(),
            record.file(),
            record.line(),
            italic.render_reset()
        )?;
        writeln!(io)
    }
}

const STYLE_BOLD: Style = Style::new().bold();
const STYLE_ITALIC: Style = Style::new().italic();

fn level_style(level: Level) -> Style {
    let color = match level {
        Level::Critical => AnsiColor::Magenta,
        Level::Error => AnsiColor::Red,
        Level::Warning => AnsiColor::Yellow,
        Level::Info => AnsiColor::Green,
        Level::Debug => AnsiColor::Cyan,
        Level::Trace => AnsiColor::Blue,
    };
    Style::new().fg_color(Some(Color::Ansi(color)))
}

impl Drain for StderrDrain {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> io::Result<()> {
        let kv_pairs = StderrDrain::collect_kv(record, values);

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        self.write_line(&mut buf, record, &kv_pairs)?;

        let mut stderr = io::stderr().lock();
        stderr.write_all(&buf)?;
        stderr.flush()
    }
}
