use crate::domain::error::TrackError;
use crate::domain::error_hook::{ErrorObserver, ObserverId};

/// Port for the environment's global uncaught-error mechanism.
///
/// Implementations own a single handler that notifies every subscribed
/// observer and then hands the error to whatever handler was installed before.
pub trait ErrorHookPort: Send + Sync {
    /// Installs the handler. Calling it again while installed is a no-op.
    fn install(&self) -> Result<(), TrackError>;

    /// Restores the previous handler. Returns `false` if nothing was removed.
    fn uninstall(&self) -> Result<bool, TrackError>;

    fn is_installed(&self) -> bool;

    fn subscribe(&self, observer: ErrorObserver) -> ObserverId;

    fn unsubscribe(&self, id: ObserverId) -> bool;

    /// Whether any observer, from any tracker, is still subscribed.
    fn has_observers(&self) -> bool;
}
