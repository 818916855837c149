use std::time::Duration;

use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "Universal Website Scraper";
pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 780.0;

pub const BADGE_TEXT: &str = "Universal Scraper · Viewer";
pub const TAGLINE: &str =
    "Paste any public URL to fetch, render JS, scroll, click, and extract JSON.";
pub const INPUT_LABEL: &str = "TARGET URL";
pub const INPUT_HINT: &str = "https://example.com";
pub const EMPTY_STATE_TEXT: &str =
    "Run your first scrape to view structured metadata and sections.";

pub const ENGINE_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub const SUBMIT_BUTTON_WIDTH: f32 = 110.0;
pub const INTERACTIONS_MAX_HEIGHT: f32 = 190.0;
pub const SECTION_MAX_HEIGHT: f32 = 320.0;

pub const ACCENT: Color32 = Color32::from_rgb(74, 222, 128);
pub const ERROR_FILL: Color32 = Color32::from_rgb(69, 10, 10);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(220, 38, 38);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(254, 202, 202);

pub const PAGE_SCROLL_ID: &str = "page_scroll";
pub const TOAST_ID: &str = "toast";
