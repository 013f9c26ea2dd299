// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

// (tag name, foreground, bold)
const TAGS: [(&str, &str, bool); 4] = [
  ("error", "#ff4444", true),
  ("warn", "#ffbb33", false),
  ("info", "#33b5e5", false),
  ("debug", "#aaaaaa", false),
];

/// Routes `log` records into the console pane at the bottom of the window.
struct ConsoleLogger;

pub fn init(view: &TextView, max_level: LevelFilter) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, color, bold) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

/// (marker, tag) for a level.
fn style_for(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("[E]", "error"),
    Level::Warn => ("[W]", "warn"),
    Level::Info => ("[I]", "info"),
    Level::Debug => ("[D]", "debug"),
    Level::Trace => ("[T]", "debug"),
  }
}

fn format_line(level: Level, message: &str) -> String {
  let (marker, _) = style_for(level);
  format!("{}  {}\n", marker, message)
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let (_, tag_name) = style_for(record.level());
    let msg = format_line(record.level(), &record.args().to_string());

    // The buffer may only be touched from the GTK thread.
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|weak| weak.upgrade()) else {
        eprint!("{}", msg);
        return;
      };

      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_every_level_maps_to_a_registered_tag() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
      let (_, tag) = style_for(level);
      assert!(TAGS.iter().any(|(name, _, _)| *name == tag), "{:?}", level);
    }
  }

  #[test]
  fn test_format_line() {
    assert_eq!(format_line(Level::Warn, "mismatch"), "[W]  mismatch\n");
  }
}
