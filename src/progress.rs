// src/progress.rs
/// Lightweight progress reporting for the detail-resolution loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item's release date was resolved.
    fn item_done(&mut self, _name: &str, _release_date: &str) {}

    /// One item could not be resolved; the batch continues.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints progress lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("🔎 Resolving release dates for {total} items…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str, release_date: &str) {
        self.done += 1;
        println!("  [{}/{}] {name} → {release_date}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.failed += 1;
        println!("  [{}/{}] {name} ✗ {reason}", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            println!("Resolve complete ({}/{})", self.done, self.total);
        } else {
            println!("Resolve complete ({}/{}, {} failed)", self.done, self.total, self.failed);
        }
    }
}
