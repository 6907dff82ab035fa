use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use eframe::egui;
use template_picker_application::{
    ApplicationError, GalleryCell, GalleryController, GalleryEvent, OverlayView, SelectionStore,
    SubscriptionId,
};
use template_picker_domain::ImageResource;
use tracing::{error, warn};

use crate::config::AppConfig;

const WINDOW_WIDTH: f32 = 1000.0;
const WINDOW_HEIGHT: f32 = 720.0;
const GRID_SPACING: f32 = 20.0;
const INACTIVE_OPACITY: f32 = 0.65;
const OVERLAY_SCREEN_FRACTION: f32 = 0.8;

type TextureCache = HashMap<usize, Option<egui::TextureHandle>>;

struct GalleryApp {
    controller: GalleryController,
    store: Rc<dyn SelectionStore>,
    subscription: SubscriptionId,
    textures: TextureCache,
    grid_columns: usize,
    narrow_breakpoint: f32,
}

impl GalleryApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        controller: GalleryController,
        store: Rc<dyn SelectionStore>,
        grid_columns: usize,
        narrow_breakpoint: f32,
    ) -> Self {
        let repaint = cc.egui_ctx.clone();
        let subscription = store.subscribe(Box::new(move |_| repaint.request_repaint()));
        Self {
            controller,
            store,
            subscription,
            textures: HashMap::new(),
            grid_columns,
            narrow_breakpoint,
        }
    }

    fn draw_grid(
        &mut self,
        ui: &mut egui::Ui,
        cells: &[GalleryCell],
        events: &mut Vec<GalleryEvent>,
    ) {
        let available = ui.available_width();
        let columns = columns_for_width(available, self.grid_columns, self.narrow_breakpoint);
        let cell_width = (available - GRID_SPACING * (columns as f32 - 1.0)) / columns as f32;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("template_grid")
                .num_columns(columns)
                .spacing([GRID_SPACING, GRID_SPACING])
                .show(ui, |ui| {
                    for (position, cell) in cells.iter().enumerate() {
                        ui.vertical_centered(|ui| {
                            ui.set_width(cell_width);
                            let texture = texture_for(
                                &mut self.textures,
                                ui.ctx(),
                                cell.index,
                                &cell.thumbnail.image,
                            );
                            if draw_thumbnail(ui, texture.as_ref(), cell, cell_width).clicked() {
                                events.push(GalleryEvent::ThumbnailActivated(cell.index));
                            }
                            if ui
                                .selectable_label(cell.selector.active, &cell.selector.label)
                                .clicked()
                            {
                                events.push(GalleryEvent::SelectorActivated(cell.index));
                            }
                        });
                        if (position + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }

    fn draw_overlay(
        &mut self,
        ctx: &egui::Context,
        overlay: &OverlayView,
        events: &mut Vec<GalleryEvent>,
    ) {
        let mut open = true;
        let max_size = ctx.screen_rect().size() * OVERLAY_SCREEN_FRACTION;
        let texture = texture_for(&mut self.textures, ctx, overlay.index, &overlay.image);

        egui::Window::new(&overlay.caption)
            .id(egui::Id::new("template_preview"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match &texture {
                    Some(texture) => {
                        let size = fit_within(texture.size_vec2(), max_size);
                        ui.add(egui::Image::new((texture.id(), size)));
                    }
                    None => {
                        ui.label(format!("could not load {}", overlay.image));
                    }
                }
                ui.vertical_centered(|ui| ui.label(&overlay.caption));
            });

        if !open {
            events.push(GalleryEvent::OverlayDismissed);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.controller.render();
        let mut events = Vec::new();

        if view.overlay.is_some() && ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            events.push(GalleryEvent::OverlayDismissed);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(view.heading);
            ui.separator();
            if view.cells.is_empty() {
                ui.label("No templates available");
                return;
            }
            self.draw_grid(ui, &view.cells, &mut events);
        });

        if let Some(overlay) = &view.overlay {
            self.draw_overlay(ctx, overlay, &mut events);
        }

        for event in events {
            if let Err(error) = self.controller.dispatch(event) {
                error!(%error, ?event, "gallery event rejected");
            }
        }
    }
}

impl Drop for GalleryApp {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

fn draw_thumbnail(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    cell: &GalleryCell,
    cell_width: f32,
) -> egui::Response {
    let response = match texture {
        Some(texture) => {
            let size = fit_within(texture.size_vec2(), egui::vec2(cell_width, f32::INFINITY));
            ui.add(
                egui::Image::new((texture.id(), size))
                    .tint(thumbnail_tint(cell.thumbnail.active))
                    .sense(egui::Sense::click()),
            )
        }
        None => ui.button(format!("{} (no preview)", cell.selector.label)),
    };
    response.on_hover_cursor(egui::CursorIcon::ZoomIn)
}

fn texture_for(
    textures: &mut TextureCache,
    ctx: &egui::Context,
    index: usize,
    image: &ImageResource,
) -> Option<egui::TextureHandle> {
    textures
        .entry(index)
        .or_insert_with(|| match load_color_image(image.as_path()) {
            Ok(color_image) => Some(ctx.load_texture(
                format!("template-{index}"),
                color_image,
                egui::TextureOptions::LINEAR,
            )),
            Err(error) => {
                warn!(%error, image = %image, "template image could not be loaded");
                None
            }
        })
        .clone()
}

fn load_color_image(path: &Path) -> Result<egui::ColorImage, ApplicationError> {
    let rgba = image::open(path)
        .map_err(|error| ApplicationError::Decode(format!("{}: {error}", path.display())))?
        .to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

fn thumbnail_opacity(active: bool) -> f32 {
    if active {
        1.0
    } else {
        INACTIVE_OPACITY
    }
}

fn thumbnail_tint(active: bool) -> egui::Color32 {
    egui::Color32::WHITE.gamma_multiply(thumbnail_opacity(active))
}

fn columns_for_width(width: f32, columns: usize, narrow_breakpoint: f32) -> usize {
    if width < narrow_breakpoint {
        1
    } else {
        columns.max(1)
    }
}

/// Scales `size` down to fit inside `max`, preserving aspect ratio.
fn fit_within(size: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return size;
    }
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
    size * scale
}

pub fn launch_window(
    controller: GalleryController,
    store: Rc<dyn SelectionStore>,
    config: &AppConfig,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    let grid_columns = config.grid_columns;
    let narrow_breakpoint = config.narrow_breakpoint;

    eframe::run_native(
        "template-picker",
        options,
        Box::new(move |cc| {
            Ok(Box::new(GalleryApp::new(
                cc,
                controller,
                store,
                grid_columns,
                narrow_breakpoint,
            )))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn narrow_windows_use_one_column() {
        assert_eq!(columns_for_width(500.0, 3, 768.0), 1);
        assert_eq!(columns_for_width(900.0, 3, 768.0), 3);
        assert_eq!(columns_for_width(900.0, 0, 768.0), 1);
    }

    #[test]
    fn inactive_thumbnails_are_dimmed() {
        assert_eq!(thumbnail_opacity(true), 1.0);
        assert_eq!(thumbnail_opacity(false), 0.65);
        assert_eq!(thumbnail_tint(true), egui::Color32::WHITE);
        assert_ne!(thumbnail_tint(false), egui::Color32::WHITE);
    }

    #[test]
    fn fit_within_preserves_aspect_and_never_upscales() {
        let fitted = fit_within(egui::vec2(400.0, 200.0), egui::vec2(200.0, 200.0));
        assert_eq!(fitted, egui::vec2(200.0, 100.0));

        let small = fit_within(egui::vec2(50.0, 40.0), egui::vec2(200.0, 200.0));
        assert_eq!(small, egui::vec2(50.0, 40.0));
    }

    #[test]
    fn load_color_image_decodes_png() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("1.png");
        let img = image::RgbaImage::from_fn(4, 3, |_x, _y| image::Rgba([10, 20, 30, 255]));
        img.save(&path).expect("save");

        let color_image = load_color_image(&path).expect("decode");
        assert_eq!(color_image.size, [4, 3]);
    }

    #[test]
    fn load_color_image_reports_bad_files() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").expect("write");

        assert!(matches!(
            load_color_image(&path),
            Err(ApplicationError::Decode(_))
        ));
    }
}
