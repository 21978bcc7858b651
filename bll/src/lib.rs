//! Business Logic Layer: replays demos into [model::game::Game]s & [model::report::PositionSnapshot]s

pub mod state_machine;
pub mod statistics;
pub mod recordings;

#[cfg(test)]
mod test_dal;

use bll_api::{Config, DemoAnalysisApi};
use dal_api::DemoFrames;
use model::report::{GamesStream, SnapshotsStream};
use std::sync::Arc;


/// [DemoAnalysisApi] implementation replaying demos sequentially, one frame at a time
pub struct DemoAnalyser {
    config: Arc<Config>,
}

impl DemoAnalysisApi for DemoAnalyser {

    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self {
        Self {
            config: config.into(),
        }
    }

    fn summarize_demos(&self, demo_daos: Vec<Box<dyn DemoFrames>>) -> GamesStream {
        statistics::summarize_demos(Arc::clone(&self.config), demo_daos)
    }

    fn record_positions(&self, demo_daos: Vec<Box<dyn DemoFrames>>) -> SnapshotsStream {
        recordings::record_positions(Arc::clone(&self.config), demo_daos)
    }

}
