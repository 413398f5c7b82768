use std::future::Future;

use lumo_shared::types::Result;

/// Loads a single style resource. The returned future resolves once the
/// resource is usable for rendering; an `Err` means the resource could not
/// be loaded and the caller decides whether to proceed without it.
pub trait StyleLoader {
    fn load(&self, href: &str) -> impl Future<Output = Result<()>>;
}
