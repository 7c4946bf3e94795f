use std::cell::Cell;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Route `log` output to stderr for the duration of the test binary.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logger() {
  LOGGER.call_once(|| {
    let dispatch = fern::Dispatch::new()
      .format(|out, message, record| {
        out.finish(format_args!(
          "[{} {}] {}",
          record.level(),
          record.target(),
          message
        ))
      })
      .level(log::LevelFilter::Trace)
      .chain(std::io::stderr());
    // Another test harness may already own the global logger.
    let _ = dispatch.apply();
  });
}

/// Counts how many times a renderer under test was invoked.
#[derive(Debug, Default)]
pub struct Counter(Cell<usize>);

impl Counter {
  pub fn tick(&self) {
    self.0.set(self.0.get() + 1);
  }

  pub fn count(&self) -> usize {
    self.0.get()
  }
}
