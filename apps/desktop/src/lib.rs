use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use lcomp::features::landing::content;

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: content::BRAND.to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Opens the native window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let head = format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><script src="{}"></script>"#,
            content::TAILWIND_CDN
        );
        let cfg = Config::default().with_window(window).with_custom_head(head);

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}
