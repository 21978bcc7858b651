//! Factory for obtaining one of the implementations of our DAO objects

use std::sync::Arc;
use dal_api::{Config, DemoFrames};
use crate::{
    stdin_reader::DemoStdinReader,
    sync_file_reader::DemoFileSyncReader,
};


/// The locator meaning "read the demo from the standard input"
pub const STDIN_LOCATOR: &str = "-";

/// Instantiates a Data Access Object (dao) able to work on the demo pointed to by `demo_locator`:
/// either a file path or [STDIN_LOCATOR]
pub fn instantiate_demo_dao(config: Arc<Config>, demo_locator: &str) -> Box<dyn DemoFrames> {
    if demo_locator == STDIN_LOCATOR {
        DemoStdinReader::new(config)
    } else {
        DemoFileSyncReader::new(config, demo_locator)
    }
}


/// Unit tests for the [factory](super) module
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_locators() {
        let dao = instantiate_demo_dao(Arc::new(Config::default()), "tests/resources/duel.dmo");
        let demo_stream = dao.demo_stream()
            .unwrap_or_else(|err| panic!("Couldn't create the `DemoStream`: {err}"));
        assert_eq!(demo_stream.source_name, "tests/resources/duel.dmo");
    }
}
