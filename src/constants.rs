// DOM ids, selectors and class names the page markup is expected to provide.

// Slides
pub const PANEL_SELECTOR: &str = ".fp-section";
pub const NAV_CONTROL_SELECTOR: &str = "button[onclick^=\"scrollToSection\"], [data-section]";
pub const SPA_MODE_CLASS: &str = "spa-mode";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const HERO_PRIMARY_ID: &str = "logo-legion";
pub const HERO_SECONDARY_ID: &str = "logo-grafix";
pub const GLOBAL_NAVIGATE_FN: &str = "scrollToSection";

// Background
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Cursor and hover effects
pub const CURSOR_ID: &str = "custom-cursor";
pub const CURSOR_CLASSES: &str = "fixed w-8 h-8 border border-white rounded-full pointer-events-none z-[9999] transition-transform duration-100 ease-out mix-blend-difference hidden md:block";
pub const CURSOR_HOVER_CLASSES: [&str; 2] = ["scale-150", "bg-white"];
pub const INTERACTIVE_SELECTOR: &str = "button, a, .card-3d, .nav-link";
pub const TILT_CARD_SELECTOR: &str = ".card-3d";

// Page chrome
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const GRID_CLASS: &str = "grid";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const CLOSE_MOBILE_MENU_FN: &str = "closeMobileMenu";
pub const HIDDEN_CLASS: &str = "hidden";

// Contact popup
pub const POPUP_ID: &str = "portfolio-popup";
pub const POPUP_CONTENT_ID: &str = "popup-content";
pub const POPUP_CLOSE_ID: &str = "close-popup";
pub const POPUP_TRIGGER_SELECTOR: &str = ".portfolio-card";
pub const POPUP_CLASSES: &str = "fixed inset-0 z-[10000] flex items-center justify-center p-4 opacity-0 pointer-events-none transition-all duration-500 backdrop-blur-md bg-black/60";
pub const CONTACT_EMAIL: &str = "legionzinfo@gmail.com";
