//! Show/hide state of the list panel per layout breakpoint.

/// Default width (in terminal columns) at which the desktop layout starts.
pub const DEFAULT_TABLET_BREAKPOINT: u16 = 100;

/// Layout class derived from the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Narrow screens: the panel overlays the main view when open
    Tablet,
    /// Wide screens: the panel is docked beside the main view when open
    Desktop,
}

impl Breakpoint {
    /// Classify `width`; anything narrower than `tablet_breakpoint` is a tablet.
    pub fn for_width(width: u16, tablet_breakpoint: u16) -> Self {
        if width < tablet_breakpoint {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Two independent visibility flags, one per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveFlags {
    pub is_on_tablet: bool,
    pub is_on_desktop: bool,
}

impl Default for ResponsiveFlags {
    fn default() -> Self {
        Self {
            is_on_tablet: false,
            is_on_desktop: true,
        }
    }
}

impl ResponsiveFlags {
    pub fn toggle_tablet(&mut self) {
        self.is_on_tablet = !self.is_on_tablet;
    }

    pub fn toggle_desktop(&mut self) {
        self.is_on_desktop = !self.is_on_desktop;
    }

    pub fn close_tablet(&mut self) {
        self.is_on_tablet = false;
    }

    /// Toggle whichever flag governs `breakpoint`.
    pub fn toggle(&mut self, breakpoint: Breakpoint) {
        match breakpoint {
            Breakpoint::Tablet => self.toggle_tablet(),
            Breakpoint::Desktop => self.toggle_desktop(),
        }
    }

    /// Whether the panel is shown at `breakpoint`.
    pub fn is_open(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Tablet => self.is_on_tablet,
            Breakpoint::Desktop => self.is_on_desktop,
        }
    }
}
