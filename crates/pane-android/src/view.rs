//! Root view construction.

use crate::host::{DisplayMetrics, HostKind};

/// Root of the view tree a host component shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RootView {
    /// The sketch surface is the root and fills the window.
    Surface { width: u32, height: u32 },

    /// The surface sits in a linear container centred inside a relative
    /// container painted `background`.
    Centered { width: u32, height: u32, background: u32 },
}

impl RootView {
    /// Picks the root view for a sketch of `width` x `height`.
    ///
    /// Only activities embed the surface; wallpapers and watchfaces always
    /// draw straight onto the surface they are handed.
    pub fn layout(
        kind: HostKind,
        width: u32,
        height: u32,
        display: DisplayMetrics,
        window_color: u32,
    ) -> Self {
        let fills_display = width == display.width && height == display.height;
        match kind {
            HostKind::Fragment if !fills_display => RootView::Centered {
                width,
                height,
                background: window_color,
            },
            HostKind::Fragment => RootView::Surface { width, height },
            HostKind::Wallpaper | HostKind::WatchFace => RootView::Surface {
                width: display.width,
                height: display.height,
            },
        }
    }

    pub fn surface_size(&self) -> (u32, u32) {
        match *self {
            RootView::Surface { width, height } | RootView::Centered { width, height, .. } => {
                (width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: DisplayMetrics = DisplayMetrics { width: 1080, height: 1920, density: 3.0 };

    #[test]
    fn full_size_fragment_uses_bare_surface() {
        let v = RootView::layout(HostKind::Fragment, 1080, 1920, DISPLAY, 0xFF000000);
        assert_eq!(v, RootView::Surface { width: 1080, height: 1920 });
    }

    #[test]
    fn smaller_fragment_is_centered_on_window_color() {
        let v = RootView::layout(HostKind::Fragment, 400, 400, DISPLAY, 0xFF336699);
        assert_eq!(v, RootView::Centered { width: 400, height: 400, background: 0xFF336699 });
        assert_eq!(v.surface_size(), (400, 400));
    }

    #[test]
    fn wallpaper_and_watchface_always_fill_display() {
        for kind in [HostKind::Wallpaper, HostKind::WatchFace] {
            let v = RootView::layout(kind, 400, 400, DISPLAY, 0);
            assert_eq!(v, RootView::Surface { width: 1080, height: 1920 });
        }
    }
}
