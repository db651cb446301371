//! UI rendering methods for the reader: chrome, page body and shortcuts.

use crate::ReaderApp;
use crate::colors;
use crate::constants::{
    BASE_FONT_SIZE, HEADING_SCALE, PAGE_MARGIN, PAGE_STEP, PROGRESS_BAR_HEIGHT,
};
use eframe::egui;
use reading_panel::document::{ComputedStyle, ElementId, ElementKind, Selector};
use reading_panel::host::ElementQuery;
use reading_panel::reading::reading_progress;
use reading_panel::{NavItem, active_nav_item, anchor_id};

/// Result of laying out the page body.
#[derive(Debug, Default)]
struct PageOutput {
    /// Article top and height relative to the scrolled content.
    article: Option<(f32, f32)>,
    /// Slug of a link the reader clicked.
    open: Option<String>,
    /// The pending anchor was laid out and scrolled to.
    anchor_reached: bool,
}

/// Shortcut-triggered actions, collected before any state changes.
#[derive(Debug)]
struct KeyActions {
    scroll_top: bool,
    scroll_bottom: bool,
    page_down: bool,
    toggle_theme: bool,
    toggle_focus: bool,
}

impl ReaderApp {
    /// Handles keyboard shortcuts on article pages.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if self.panel.is_none() || ctx.wants_keyboard_input() {
            return;
        }

        let actions = ctx.input(|i| {
            let command = i.modifiers.command;
            KeyActions {
                scroll_top: command && i.key_pressed(egui::Key::ArrowUp),
                scroll_bottom: command && i.key_pressed(egui::Key::ArrowDown),
                page_down: !i.modifiers.any() && i.key_pressed(egui::Key::Space),
                toggle_theme: command && i.key_pressed(egui::Key::T),
                toggle_focus: !i.modifiers.any() && i.key_pressed(egui::Key::F),
            }
        });

        let max_offset = (self.scroll.content_height - self.scroll.viewport_height).max(0.0);
        if actions.scroll_top {
            self.pending_scroll = Some(0.0);
        }
        if actions.scroll_bottom {
            self.pending_scroll = Some(max_offset);
        }
        if actions.page_down {
            let target = self.scroll.offset + self.scroll.viewport_height * PAGE_STEP;
            self.pending_scroll = Some(target.min(max_offset));
        }
        if actions.toggle_theme {
            self.toggle_theme(ctx);
        }
        if actions.toggle_focus {
            self.toggle_focus();
        }
    }

    fn style_of(&self, selector: Selector) -> Option<ComputedStyle> {
        self.document
            .query(selector)
            .and_then(|id| self.document.computed_style(id))
    }

    /// Renders the top bar: navigation, theme toggle and progress strip.
    pub fn show_navbar(&mut self, ctx: &egui::Context) {
        let slug = self.page().map(|page| page.slug.clone()).unwrap_or_default();
        let active = active_nav_item(&slug);
        let nav_style = self.style_of(Selector::Nav);
        let toggle_style = self.style_of(Selector::ThemeToggle);
        let progress_style = self.style_of(Selector::ProgressBar);

        let mut clicked: Option<NavItem> = None;
        let mut theme_clicked = false;

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.scope(|ui| {
                    apply_chrome_style(ui, nav_style);
                    ui.strong(&self.site.title);
                    ui.separator();
                    for item in NavItem::ALL {
                        if ui
                            .selectable_label(active == Some(item), item.label())
                            .clicked()
                        {
                            clicked = Some(item);
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    apply_chrome_style(ui, toggle_style);
                    if ui
                        .button(self.theme.icon())
                        .on_hover_text("Toggle dark/light mode (Ctrl+T)")
                        .clicked()
                    {
                        theme_clicked = true;
                    }
                });
            });

            if progress_style.is_some() {
                ui.scope(|ui| {
                    apply_chrome_style(ui, progress_style);
                    self.draw_progress_bar(ui);
                });
            }
        });

        if let Some(item) = clicked {
            self.open_page(ctx, item.target());
            self.pending_anchor = item.anchor().map(str::to_owned);
        }
        if theme_clicked {
            self.toggle_theme(ctx);
        }
    }

    fn draw_progress_bar(&self, ui: &mut egui::Ui) {
        let scroll = self.scroll;
        let progress = reading_progress(
            scroll.article_top,
            scroll.article_height,
            scroll.viewport_height,
            scroll.offset,
        );

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), PROGRESS_BAR_HEIGHT),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        let mut filled = rect;
        filled.set_width(rect.width() * progress / 100.0);
        ui.painter().rect_filled(filled, 0.0, colors::PROGRESS_FILL);
    }

    /// Renders the bottom footer.
    pub fn show_footer(&self, ctx: &egui::Context) {
        let footer = self
            .document
            .query(Selector::Footer)
            .and_then(|id| self.document.get(id).map(|element| (id, element)));
        let Some((id, element)) = footer else {
            return;
        };

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            apply_chrome_style(ui, self.document.computed_style(id));
            ui.vertical_centered(|ui| {
                for line in element.text.lines() {
                    ui.small(line);
                }
            });
        });
    }

    /// Renders the scrollable page body.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.page().is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("No pages loaded.\nPass a site file: `reading-panel <site.ron>`");
                });
                return;
            }

            let mut area = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false]);
            if let Some(offset) = self.pending_scroll.take() {
                area = area.vertical_scroll_offset(offset);
            }

            let output = area.show(ui, |ui| self.show_page(ui));

            self.scroll.offset = output.state.offset.y;
            self.scroll.viewport_height = output.inner_rect.height();
            self.scroll.content_height = output.content_size.y;
            if let Some((top, height)) = output.inner.article {
                self.scroll.article_top = top;
                self.scroll.article_height = height;
            }
            if output.inner.anchor_reached {
                self.pending_anchor = None;
            }
            if let Some(slug) = output.inner.open {
                self.open_page(ctx, &slug);
            }
        });
    }

    /// Lays out the page body.
    fn show_page(&self, ui: &mut egui::Ui) -> PageOutput {
        let content_top = ui.min_rect().top();
        let mut output = PageOutput::default();
        ui.add_space(PAGE_MARGIN);

        let root = self.document.query(Selector::ContentRoot);
        let style = root
            .and_then(|root| self.document.computed_style(root))
            .unwrap_or_else(|| self.document.base_style());

        let rect = page_column(ui, style, |ui| {
            output.anchor_reached = self.show_blocks(ui, root);
            if self.page().is_some_and(|page| page.slug == NavItem::Articles.target()) {
                output.open = self.show_article_links(ui);
            }
        });
        if root.is_some() {
            output.article = Some((rect.top() - content_top, rect.height()));
        }

        ui.add_space(PAGE_MARGIN);
        output
    }

    /// Lists every article as a link. Returns the slug of a clicked one.
    fn show_article_links(&self, ui: &mut egui::Ui) -> Option<String> {
        let mut clicked = None;
        for article in self.site.articles() {
            ui.horizontal_wrapped(|ui| {
                if ui
                    .link(egui::RichText::new(&article.title).size(BASE_FONT_SIZE * 1.1))
                    .clicked()
                {
                    clicked = Some(article.slug.clone());
                }
                if let Some(meta) = &article.meta {
                    ui.weak(meta);
                }
            });
            ui.add_space(BASE_FONT_SIZE * 0.5);
        }
        clicked
    }

    /// Renders the body elements under `parent` (top-level ones when `None`).
    /// Returns whether a heading matching the pending anchor was shown.
    fn show_blocks(&self, ui: &mut egui::Ui, parent: Option<ElementId>) -> bool {
        let anchor = self.pending_anchor.as_deref();
        let mut reached = false;
        for (id, element) in self.document.elements() {
            if element.parent != parent || element.kind.is_chrome() {
                continue;
            }
            let Some(style) = self.document.computed_style(id) else {
                continue;
            };

            match element.kind {
                ElementKind::Heading => {
                    let response = ui.label(
                        egui::RichText::new(&element.text)
                            .size(BASE_FONT_SIZE * HEADING_SCALE)
                            .strong(),
                    );
                    if anchor.is_some_and(|anchor| anchor_id(&element.text) == anchor) {
                        response.scroll_to_me(Some(egui::Align::TOP));
                        reached = true;
                    }
                    ui.add_space(BASE_FONT_SIZE * 0.5);
                }
                ElementKind::Meta => self.show_meta(ui, &element.text),
                ElementKind::Paragraph | ElementKind::ListItem | ElementKind::Blockquote => {
                    text_block(ui, element.kind, &element.text, style);
                }
                _ => {}
            }
        }
        reached
    }

    fn show_meta(&self, ui: &mut egui::Ui, meta: &str) {
        ui.horizontal_wrapped(|ui| {
            if !meta.is_empty() {
                ui.weak(meta);
            }
            if let Some(minutes) = self.reading_minutes {
                ui.add_space(BASE_FONT_SIZE);
                ui.label(
                    egui::RichText::new(format!("📖 {minutes} min read"))
                        .size(BASE_FONT_SIZE * 0.9)
                        .color(colors::READING_ACCENT),
                );
            }
        });
        ui.add_space(BASE_FONT_SIZE);
    }
}

/// Fades and disables chrome according to its computed style.
fn apply_chrome_style(ui: &mut egui::Ui, style: Option<ComputedStyle>) {
    let Some(style) = style else {
        return;
    };
    ui.set_opacity(style.opacity);
    if !style.interactive {
        ui.disable();
    }
}

/// Lays out a column of at most `style.max_width`, centered if requested.
fn page_column(
    ui: &mut egui::Ui,
    style: ComputedStyle,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Rect {
    let available = ui.available_width();
    let width = style.max_width.min(available - 2.0 * PAGE_MARGIN).max(0.0);
    let indent = if style.centered {
        (available - width) / 2.0
    } else {
        PAGE_MARGIN
    };

    ui.horizontal_top(|ui| {
        ui.add_space(indent);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        })
        .response
        .rect
    })
    .inner
}

/// Renders a paragraph, list item or quote at its computed size.
fn text_block(ui: &mut egui::Ui, kind: ElementKind, text: &str, style: ComputedStyle) {
    let size = BASE_FONT_SIZE * style.font_scale;
    let rich = egui::RichText::new(text)
        .size(size)
        .line_height(Some(size * style.line_height));

    match kind {
        ElementKind::ListItem => {
            ui.horizontal_top(|ui| {
                ui.label(egui::RichText::new("•").size(size));
                ui.add(egui::Label::new(rich).wrap());
            });
        }
        ElementKind::Blockquote => {
            let response = egui::Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(8.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(rich.italics());
                })
                .response;
            ui.painter().vline(
                response.rect.left(),
                response.rect.y_range(),
                egui::Stroke::new(3.0, colors::QUOTE_BAR),
            );
        }
        _ => {
            ui.label(rich);
        }
    }
    ui.add_space(size * 0.6);
}
