/// Tailwind's default viewport breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        match width {
            w if w >= 1536.0 => Self::Xxl,
            w if w >= 1280.0 => Self::Xl,
            w if w >= 1024.0 => Self::Lg,
            w if w >= 768.0 => Self::Md,
            w if w >= 640.0 => Self::Sm,
            _ => Self::Xs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Whether the header shows its full navigation instead of the menu button.
    pub fn has_desktop_nav(&self) -> bool {
        *self >= Self::Lg
    }
}

/// Fraction of the page scrolled past, in `0.0..=1.0`.
pub fn scroll_progress(scroll_y: f64, page_height: f64, viewport_height: f64) -> f64 {
    let scrollable = page_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let cases = [
            (0.0, Breakpoint::Xs),
            (639.9, Breakpoint::Xs),
            (640.0, Breakpoint::Sm),
            (767.0, Breakpoint::Sm),
            (768.0, Breakpoint::Md),
            (1024.0, Breakpoint::Lg),
            (1279.0, Breakpoint::Lg),
            (1280.0, Breakpoint::Xl),
            (1536.0, Breakpoint::Xxl),
            (3840.0, Breakpoint::Xxl),
        ];
        for (width, expected) in cases {
            assert_eq!(Breakpoint::from_width(width), expected, "{width}");
        }
    }

    #[test]
    fn test_desktop_nav() {
        assert!(!Breakpoint::Md.has_desktop_nav());
        assert!(Breakpoint::Lg.has_desktop_nav());
        assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
    }
}
