//! SvelteKit: no native config is consulted

use super::{resolve_routes_layout, FrameworkStrategy, ResolveContext};
use crate::detection::FrameworkKind;
use crate::error::ResolveError;
use crate::output::Config;
use async_trait::async_trait;

pub struct SvelteKitStrategy;

#[async_trait]
impl FrameworkStrategy for SvelteKitStrategy {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::SvelteKit
    }

    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Config, ResolveError> {
        resolve_routes_layout(ctx, self.kind())
    }
}
