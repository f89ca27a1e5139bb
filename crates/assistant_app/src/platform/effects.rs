use assistant_core::Effect;
use assistant_logging::assistant_info;
use assistant_page::{persist_bounds, resolve_href, BoundsStore};
use url::Url;

/// Executes core effects against the platform: bounds-store writes and
/// action-link activations.
pub(crate) struct EffectRunner<S> {
    store: S,
    base_href: Option<Url>,
}

impl<S: BoundsStore> EffectRunner<S> {
    pub(crate) fn new(store: S, base_href: Option<Url>) -> Self {
        Self { store, base_href }
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistBounds { min, max } => {
                    persist_bounds(&mut self.store, min, max);
                }
                Effect::ActivateLink {
                    row_index,
                    link_index,
                    href,
                } => {
                    // Activation stands in for a user click; following the
                    // link is network I/O and stays out of scope.
                    let target = href
                        .as_deref()
                        .and_then(|href| resolve_href(self.base_href.as_ref(), href));
                    match target {
                        Some(url) => {
                            assistant_info!(
                                "activate row {} link {} -> {}",
                                row_index + 1,
                                link_index,
                                url
                            );
                        }
                        None => {
                            assistant_info!(
                                "activate row {} link {} (href {:?})",
                                row_index + 1,
                                link_index,
                                href
                            );
                        }
                    }
                }
            }
        }
    }
}
