use std::time::Duration;

use eframe::{egui, Frame};
use egui::{Align2, Color32, Context, FontId, Rect};
use rand::SeedableRng;
use rand::rngs::StdRng;

use truism_core::config::{DisplayConfig, GLYPH_WIDTH_PX};
use truism_core::effects::{scan_line_y, unpack_rgb};
use truism_core::model::chain_model::ChainModel;
use truism_core::model::generator::Generator;
use truism_core::ui_state::{TouchPoint, UiState};
use truism_core::TruismError;

/// Quotes file, loaded once at startup.
const CORPUS: &str = "./data/quotes.txt";

/// Polling cadence of the device loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Height of one glyph cell of the device font, unscaled.
const GLYPH_HEIGHT_PX: u32 = 12;

/// Converts a packed `0xRRGGBB` colour for the painter.
fn to_color32(color: u32) -> Color32 {
    let (r, g, b) = unpack_rgb(color);
    Color32::from_rgb(r, g, b)
}

/// Desktop stand-in for the touchscreen panel (MUST persist between frames in egui).
///
/// The mouse plays the finger: pressing the primary button is a touch at
/// the pointer position.
struct TruismUI {
    model: ChainModel,
    config: DisplayConfig,
    state: UiState,
    rng: StdRng,
}

impl TruismUI {
    /// Builds the chain and the first quote.
    fn new() -> Result<Self, TruismError> {
        let model = ChainModel::load(CORPUS)?;
        let config = DisplayConfig::default();
        let mut rng = StdRng::from_os_rng();
        let state = UiState::new(&config, &Generator::new(&model), &mut rng)?;
        log::info!("Panel ready ({}x{})", config.width(), config.height());
        Ok(Self { model, config, state, rng })
    }

    /// Current touch in panel coordinates, if the button is held over the panel.
    fn touch(ctx: &Context, screen: Rect) -> Option<TouchPoint> {
        ctx.input(|i| if i.pointer.primary_down() { i.pointer.interact_pos() } else { None })
            .filter(|pos| screen.contains(*pos))
            .map(|pos| TouchPoint {
                x: pos.x - screen.min.x,
                y: pos.y - screen.min.y,
            })
    }

    /// Draws the scan lines, behind the text.
    fn paint_scan_lines(&self, painter: &egui::Painter, screen: Rect, seconds: f32) {
        let colors = self.config.scan_colors();
        let scale = self.config.text_scale;
        let width = (self.config.scan_line_glyphs() as u32 * GLYPH_WIDTH_PX * scale) as f32;
        let height = (GLYPH_HEIGHT_PX * scale) as f32;

        for (index, color) in colors.iter().enumerate() {
            let y = scan_line_y(index, colors.len(), self.config.height(), seconds, self.config.scan_speed);
            let center = egui::pos2(screen.center().x, screen.min.y + y as f32);
            painter.rect_filled(
                Rect::from_center_size(center, egui::vec2(width, height)),
                0.0,
                to_color32(*color),
            );
        }
    }
}

impl eframe::App for TruismUI {
    /// Polling step (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::BLACK))
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let touch = Self::touch(ctx, screen);

                let generator = Generator::new(&self.model);
                let update = match self.state.on_frame(&generator, &mut self.rng, touch, now) {
                    Ok(update) => update,
                    Err(e) => {
                        log::error!("Frame failed: {e}");
                        return;
                    }
                };
                if update.regenerated {
                    log::debug!("New quote:\n{}", self.state.text());
                }

                let painter = ui.painter();
                self.paint_scan_lines(painter, screen, now.as_secs_f32());

                // Quote in the upper third, caption near the bottom
                let font = FontId::monospace((GLYPH_WIDTH_PX * self.config.text_scale) as f32 / 0.6);
                let color = to_color32(update.color);
                painter.text(
                    egui::pos2(screen.center().x, screen.min.y + screen.height() / 3.0),
                    Align2::CENTER_CENTER,
                    self.state.text().to_string(),
                    font.clone(),
                    color,
                );
                if let Some(caption) = self.state.caption() {
                    painter.text(
                        egui::pos2(screen.center().x, screen.min.y + screen.height() * 4.0 / 5.0),
                        Align2::CENTER_CENTER,
                        caption,
                        font,
                        color,
                    );
                }
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let config = DisplayConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width() as f32, config.height() as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "truism",
        options,
        Box::new(|_| {
            let app = TruismUI::new().inspect_err(|e| log::error!("Startup failed: {e}"))?;
            Ok(Box::new(app))
        }),
    )
}
