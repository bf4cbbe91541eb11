//! Sapper: same layout as SvelteKit, no native config

use super::{resolve_routes_layout, FrameworkStrategy, ResolveContext};
use crate::detection::FrameworkKind;
use crate::error::ResolveError;
use crate::output::Config;
use async_trait::async_trait;

pub struct SapperStrategy;

#[async_trait]
impl FrameworkStrategy for SapperStrategy {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::Sapper
    }

    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Config, ResolveError> {
        resolve_routes_layout(ctx, self.kind())
    }
}
