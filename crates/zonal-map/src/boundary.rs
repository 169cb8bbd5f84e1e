//! Fault boundary around a render step.

use std::panic::{self, AssertUnwindSafe};

use zonal_core::{Coordinate, MapView};

/// Run `render`, substituting [`MapView::faulted`] if it panics.
///
/// The panic is logged and swallowed; the caller always gets a view.
pub fn render_guarded<F>(fallback_center: Coordinate, render: F) -> MapView
where
    F: FnOnce() -> MapView,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(view) => view,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::error!(%reason, "render step panicked; showing fallback view");
            MapView::faulted(fallback_center)
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use zonal_core::{FAULTED_MESSAGE, ViewStatus};

    use super::*;

    #[test]
    fn passes_through_a_successful_render() {
        let center = Coordinate::new(3.0, 4.0);
        let view = render_guarded(center, || MapView::empty(ViewStatus::NoData, center, None));
        assert_eq!(view.status, ViewStatus::NoData);
    }

    #[test]
    fn substitutes_fallback_on_panic() {
        let center = Coordinate::new(3.0, 4.0);
        let view = render_guarded(center, || panic!("bad record"));

        assert_eq!(view.status, ViewStatus::Faulted);
        assert_eq!(view.message.as_deref(), Some(FAULTED_MESSAGE));
        assert_eq!(view.center, center);
        assert!(view.overlays.is_empty());
    }

    #[test]
    fn extracts_panic_messages() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("borrowed");
        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
