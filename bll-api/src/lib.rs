//! Contract of the Business Logic Layer: what can be built out of demos

mod config;
pub use config::*;

use dal_api::DemoFrames;
use model::report::{GamesStream, SnapshotsStream};
use std::sync::Arc;


pub trait DemoAnalysisApi {

    /// Creates a new instance
    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self;

    /// Replays each of the given demos, yielding their final [model::game::Game]s, in order.\
    /// A demo that fails yields its error in place of the `Game`, without stopping the others.
    fn summarize_demos(&self, demo_daos: Vec<Box<dyn DemoFrames>>) -> GamesStream;

    /// Replays each of the given demos, yielding periodic snapshots of where the players were.\
    /// A demo that fails yields its error after the snapshots taken before the failure.
    fn record_positions(&self, demo_daos: Vec<Box<dyn DemoFrames>>) -> SnapshotsStream;

}
