/// A basic element implementation for testing
/// Provides clone, equality and hash, everything a container can ask for.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    id: u32,
    name: String,
}

impl Token {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Installs a test logger once per test binary
/// Set RUST_LOG=trace to see the collections' log output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
