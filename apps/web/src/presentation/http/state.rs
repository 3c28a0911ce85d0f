use crate::{
    config::Config,
    domain::workspace::repository::WorkspaceRepository,
    infrastructure::style_transfer::traits::StyleTransferService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub style_transfer: Arc<dyn StyleTransferService>,
    pub workspaces: Arc<dyn WorkspaceRepository>,
}
