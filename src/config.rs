pub const DEFAULT_MAX_NAME_LEN: usize = 50;

/// What to do with a name longer than `Config::max_name_len`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NameOverflow {
    Reject,
    Truncate,
}

#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub max_name_len: usize,
    pub name_overflow: NameOverflow,
}

impl Config {
    pub fn new() -> Config {
        Config {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            name_overflow: NameOverflow::Reject,
        }
    }

    pub fn max_name_len(mut self, len: usize) -> Config {
        self.max_name_len = len;
        self
    }

    pub fn name_overflow(mut self, policy: NameOverflow) -> Config {
        self.name_overflow = policy;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
