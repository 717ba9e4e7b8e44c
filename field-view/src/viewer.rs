//! Interactive particle-field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (particle field, cursor trail, reveal latches) and implements
//! [`eframe::App`] to drive and render the simulation each frame.

use eframe::App;
use field_core::{field::ParticleField, reveal::Reveal, trail::CursorTrail};
use glam::Vec2;

use crate::config::AppConfig;

/// Sections shown in the scrollable side panel. Each one is revealed
/// permanently once enough of it has been scrolled into view.
const SECTIONS: &[(&str, &str)] = &[
    (
        "Drift",
        "Sixty particles wander the canvas with small random velocities. \
         When one crosses an edge it turns around rather than being pushed \
         back, so it may peek past the border for a single frame.",
    ),
    (
        "Constellations",
        "Any two particles closer than the link distance are joined by a \
         faint line. The pairs are rescanned every frame, so constellations \
         form and dissolve as the particles drift.",
    ),
    (
        "Repulsion",
        "The pointer pushes nearby particles away. The push grows the \
         deeper a particle sits inside the repulsion radius and fires every \
         frame, so holding the pointer on a particle keeps feeding it \
         energy.",
    ),
    (
        "Trail",
        "The drawn cursor is not the raw pointer: a fast follower carries \
         the dot and a slower one carries the halo ring, so both ease into \
         place a little behind your hand. The halo swells while the pointer \
         rests on a control.",
    ),
    (
        "Controls",
        "Pause freezes the field without discarding it, Step advances a \
         paused field by one frame, and Reset scatters a fresh set of \
         particles. Resizing the window never teleports particles; they \
         find the new edges on their own.",
    ),
];

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`ParticleField`], [`CursorTrail`], [`Reveal`].
/// - The loaded [`AppConfig`].
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Build the control panels and gather widget-hover state.
/// 2. Feed pointer position and canvas size into the field.
/// 3. If the field is running, tick it once and request another repaint;
///    the run loop belongs to the viewer, not to the field.
/// 4. Paint links, particles and the lagged cursor from the freshly
///    finalized positions.
///
/// ### Fields
/// - `field` - The particle field being simulated.
/// - `trail` - Lagged cursor dot and halo.
/// - `reveals` - One visibility latch per side-panel section.
/// - `cfg` - Loaded application configuration.
///
/// - `rng` - Random number generator used when resetting the field.
///
/// - `canvas_size` - Last seen canvas size, to detect resizes.
/// - `hovered_widget` - Whether the pointer sat on a control this frame.
/// - `last_link_count` - Link count of the last painted frame (status bar).
pub struct Viewer {
    field: ParticleField,
    trail: CursorTrail,
    reveals: Vec<Reveal>,
    cfg: AppConfig,

    rng: rand::rngs::ThreadRng,

    canvas_size: Vec2,
    hovered_widget: bool,
    last_link_count: usize,
}

impl Viewer {
    /// Creates a viewer from a loaded configuration.
    ///
    /// The field is seeded from the window size; the first frame adjusts
    /// it to the actual canvas rect once the panels have claimed their
    /// share. All reveal sections start hidden.
    pub fn new(cfg: AppConfig) -> Self {
        let mut rng = rand::rng();
        let bounds = Vec2::new(cfg.window.width as f32, cfg.window.height as f32);
        let field = ParticleField::new(cfg.field, bounds, &mut rng);
        let trail = CursorTrail::new(&cfg.trail);
        let reveals = vec![Reveal::new(cfg.reveal.visible_ratio); SECTIONS.len()];

        Self {
            field,
            trail,
            reveals,
            cfg,
            rng,
            canvas_size: bounds,
            hovered_widget: false,
            last_link_count: 0,
        }
    }

    /// Builds the top panel UI (run/pause, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let run = ui.button(if self.field.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Run"
                });
                if run.clicked() {
                    if self.field.is_running() {
                        self.field.stop();
                    } else {
                        self.field.start();
                    }
                }

                let step = ui.button("Step");
                if step.clicked() {
                    self.field.step();
                }

                let reset = ui.button("Reset");
                if reset.clicked() {
                    self.field.reset(&mut self.rng);
                }

                self.hovered_widget |= run.hovered() || step.hovered() || reset.hovered();
            });
        });
    }

    /// Builds the bottom status bar (running state, particle and link counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(if self.field.is_running() {
                    "running"
                } else {
                    "paused"
                });
                ui.separator();
                ui.label(format!("particles = {}", self.field.particles().len()));
                ui.label(format!("links = {}", self.last_link_count));
            });
        });
    }

    /// Builds the scrollable side panel whose sections reveal themselves
    /// as they come into view.
    fn ui_about_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("about_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("About");
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let clip = ui.clip_rect();

                    for (reveal, (title, body)) in self.reveals.iter_mut().zip(SECTIONS) {
                        let rect = if reveal.is_visible() {
                            ui.scope(|ui| {
                                ui.strong(*title);
                                ui.label(*body);
                            })
                            .response
                            .rect
                        } else {
                            // Unrevealed sections render dimmed until the
                            // latch flips; it never flips back.
                            ui.scope(|ui| {
                                ui.weak(*title);
                                ui.weak(*body);
                            })
                            .response
                            .rect
                        };

                        reveal.observe(visible_fraction(rect, clip));
                        ui.add_space(24.0);
                    }
                });
            });
    }

    /// Builds the central canvas: advances the field and paints links,
    /// particles and the lagged cursor.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // The canvas rect is the field's viewport; follow its size.
            // Particles are left in place and bounce back on their own.
            let size = Vec2::new(rect.width(), rect.height());
            if size != self.canvas_size {
                log::debug!("canvas resized to {}x{}", size.x, size.y);
                self.field.resize(size);
                self.canvas_size = size;
            }

            // Latest pointer position, in canvas-local coordinates. While
            // the pointer is elsewhere the last value keeps repelling.
            if let Some(pos) = response.hover_pos() {
                self.field
                    .set_cursor(Vec2::new(pos.x - rect.left(), pos.y - rect.top()));
            }

            if self.field.is_running() {
                self.field.tick();
                ctx.request_repaint();
            }

            self.trail.advance(self.field.cursor());
            self.trail.set_hover(self.hovered_widget);

            let to_screen = |p: Vec2| egui::pos2(rect.left() + p.x, rect.top() + p.y);

            painter.rect_filled(
                rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_rgb(8, 10, 18),
            );

            // Links first, then the discs on top, all from the positions
            // this tick finalized.
            let link_stroke = egui::Stroke::new(
                1.0,
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 8),
            );
            let mut link_count = 0;
            for (i, j) in self.field.links() {
                let a = to_screen(self.field.particles()[i].pos);
                let b = to_screen(self.field.particles()[j].pos);
                painter.line_segment([a, b], link_stroke);
                link_count += 1;
            }
            self.last_link_count = link_count;

            let disc_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 13);
            let disc_radius = self.cfg.field.particle_radius;
            for p in self.field.particles() {
                painter.circle_filled(to_screen(p.pos), disc_radius, disc_color);
            }

            // Lagged cursor dot and its trailing halo ring.
            let halo_radius = if self.trail.hover { 26.0 } else { 16.0 };
            painter.circle_stroke(
                to_screen(self.trail.halo.current),
                halo_radius,
                egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 60),
                ),
            );
            painter.circle_filled(
                to_screen(self.trail.cursor.current),
                3.0,
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
            );
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Panels run before the canvas so that this frame's widget-hover
    /// state is available when the cursor halo is painted.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.hovered_widget = false;
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_about_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

/// Fraction of `section` currently inside `viewport`, as an area ratio
/// in `[0, 1]`.
fn visible_fraction(section: egui::Rect, viewport: egui::Rect) -> f32 {
    let overlap = section.intersect(viewport);
    if !overlap.is_positive() || section.area() <= 0.0 {
        return 0.0;
    }
    overlap.area() / section.area()
}
