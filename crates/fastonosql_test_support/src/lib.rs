pub mod fake_session;
pub mod fixtures;

pub use fake_session::{FakeConnection, FakeSession, FakeSessionFactory, FakeSessionStats};

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
