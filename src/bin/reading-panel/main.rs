#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod panel_view;
mod storage;
mod ui;

use assets::{load_embedded_site, load_site_file};
use clap::Parser;
use constants::PANEL_SIZE_ESTIMATE;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use reading_panel::document::{Document, Selector};
use reading_panel::geometry::Size;
use reading_panel::host::{ElementQuery, FixedViewport, KeyValueStore, MemoryStore};
use reading_panel::panel::FloatingPanel;
use reading_panel::preferences;
use reading_panel::reading::{reading_time_minutes, scroll_key};
use reading_panel::theme::{self, Theme};
use reading_panel::{Page, Site};
use std::path::PathBuf;

/// Command line options.
#[derive(Parser, Debug)]
#[command(version, about = "A distraction-free reader with a draggable controls panel")]
struct Cli {
    /// RON site file to open instead of the bundled one
    site: Option<PathBuf>,
    /// Slug of the page to open first
    #[arg(long)]
    page: Option<String>,
    /// Forget the saved panel position
    #[arg(long)]
    reset_layout: bool,
}

/// Scroll geometry of the page area, measured every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    /// Article top relative to the top of the scrolled content.
    pub article_top: f32,
    pub article_height: f32,
}

/// Main application state for the reader.
pub struct ReaderApp {
    site: Site,
    current_page: Option<usize>,
    document: Document,
    panel: Option<FloatingPanel>,
    /// Set when a page was opened and the panel still needs a measured viewport.
    mount_pending: bool,
    geometry: FixedViewport,
    /// Mirror of persistent storage.
    preferences: MemoryStore,
    /// Lives for this run only.
    session: MemoryStore,
    theme: Theme,
    scroll: ScrollMetrics,
    pending_scroll: Option<f32>,
    /// Heading to bring into view on the next layout.
    pending_anchor: Option<String>,
    /// Estimate for the open article.
    reading_minutes: Option<usize>,
    toasts: Toasts,
}

impl ReaderApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::LEFT_BOTTOM, (10.0, -40.0))
            .direction(egui::Direction::BottomUp);

        let loaded = match &cli.site {
            Some(path) => load_site_file(path),
            None => load_embedded_site(),
        };
        let site = match loaded {
            Ok(site) => {
                log::info!("Loaded site '{}' with {} pages", site.title, site.pages.len());
                site
            }
            Err(err) => {
                log::error!("Failed to load site: {err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                Site {
                    title: "Reading Panel".to_owned(),
                    footer: Vec::new(),
                    pages: Vec::new(),
                }
            }
        };

        let mut preferences = storage::load_preferences(cc.storage);
        if cli.reset_layout {
            storage::reset_layout(&mut preferences);
        }

        let theme = theme::resolve_theme(&preferences, system_theme(&cc.egui_ctx));

        let mut app = Self {
            site,
            current_page: None,
            document: Document::new(),
            panel: None,
            mount_pending: false,
            geometry: FixedViewport {
                viewport: Size::default(),
                panel: Size::new(PANEL_SIZE_ESTIMATE[0], PANEL_SIZE_ESTIMATE[1]),
            },
            preferences,
            session: MemoryStore::new(),
            theme,
            scroll: ScrollMetrics::default(),
            pending_scroll: None,
            pending_anchor: None,
            reading_minutes: None,
            toasts,
        };
        app.apply_theme(&cc.egui_ctx);

        let requested = cli.page.filter(|slug| {
            let found = app.site.page(slug).is_some();
            if !found {
                log::warn!("No page named '{slug}', opening the landing page");
            }
            found
        });
        let initial = requested.or_else(|| app.site.landing_page().map(|page| page.slug.clone()));
        if let Some(slug) = initial {
            app.open_page(&cc.egui_ctx, &slug);
        }

        app
    }

    fn page(&self) -> Option<&Page> {
        self.current_page.and_then(|idx| self.site.pages.get(idx))
    }

    /// Switches to the page with `slug`, remembering where the reader was
    /// on the current one.
    pub fn open_page(&mut self, ctx: &egui::Context, slug: &str) {
        let Some(idx) = self.site.pages.iter().position(|page| page.slug == slug) else {
            log::warn!("Ignoring link to unknown page '{slug}'");
            return;
        };
        if self.current_page == Some(idx) {
            return;
        }

        if let Some(key) = self.page().map(|current| scroll_key(&current.slug)) {
            self.session.set(&key, self.scroll.offset.to_string());
        }

        let page = &self.site.pages[idx];
        self.document = page.to_document(&self.site);
        self.reading_minutes = self
            .document
            .query(Selector::ContentRoot)
            .map(|root| reading_time_minutes(&self.document.text_content(root)));
        self.pending_scroll = Some(
            self.session
                .get(&scroll_key(&page.slug))
                .and_then(|value| value.parse().ok())
                .unwrap_or(0.0),
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "{} - {}",
            page.title, self.site.title
        )));

        log::info!("Opened page '{}'", page.slug);
        self.current_page = Some(idx);
        self.pending_anchor = None;
        self.panel = None;
        self.mount_pending = true;
        self.scroll = ScrollMetrics::default();
    }

    /// Builds the panel once the viewport has been measured.
    fn mount_panel_if_pending(&mut self) {
        if !self.mount_pending || self.geometry.viewport == Size::default() {
            return;
        }
        self.mount_pending = false;
        self.panel = FloatingPanel::mount(&mut self.document, &self.preferences, &self.geometry);
    }

    /// Records the viewport size and keeps the panel inside it.
    fn update_geometry(&mut self, ctx: &egui::Context) {
        let screen = ctx.content_rect();
        self.geometry.viewport = Size::new(screen.width() as i32, screen.height() as i32);
        if let Some(panel) = &mut self.panel
            && !panel.is_dragging()
        {
            panel.keep_in_view(&self.geometry);
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_theme(match self.theme {
            Theme::Light => egui::Theme::Light,
            Theme::Dark => egui::Theme::Dark,
        });
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        preferences::store_theme(&mut self.preferences, self.theme);
        self.apply_theme(ctx);
    }

    /// Tracks system theme changes until the reader picks a theme.
    fn follow_system_theme(&mut self, ctx: &egui::Context) {
        if let Some(changed) =
            theme::system_theme_change(&self.preferences, self.theme, system_theme(ctx))
        {
            log::debug!("System theme changed to {}", changed.as_str());
            self.theme = changed;
            self.apply_theme(ctx);
        }
    }

    pub fn toggle_focus(&mut self) {
        if let Some(panel) = &mut self.panel {
            panel.toggle_focus(&mut self.document);
        }
    }
}

fn system_theme(ctx: &egui::Context) -> Option<Theme> {
    ctx.system_theme().map(|theme| match theme {
        egui::Theme::Light => Theme::Light,
        egui::Theme::Dark => Theme::Dark,
    })
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_geometry(ctx);
        self.follow_system_theme(ctx);
        self.mount_panel_if_pending();
        self.handle_keyboard_input(ctx);

        self.show_navbar(ctx);
        self.show_footer(ctx);
        self.show_central_panel(ctx);
        self.show_floating_panel(ctx);

        // Show toasts
        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage::flush_preferences(&mut self.preferences, storage);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reading Panel",
        options,
        Box::new(|cc| Ok(Box::new(ReaderApp::new(cc, cli)))),
    )
}
