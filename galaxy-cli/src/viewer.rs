//! Interactive viewer for the galaxy simulation
//!
//! Draws the render list each frame, turns pointer gestures into input
//! events, exposes every setting in a side panel, and reloads the settings
//! file when it changes on disk.

use eframe::egui;
use galaxy_core::render::SOURCE_MARKER_RADIUS;
use galaxy_core::{
    build_simulation_context, step_simulation, ClickModifier, InputEvent, RenderItem, Settings,
    SimulationContext, Viewport,
};
use notify::{Event, RecommendedWatcher, Watcher};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Upper bound on remembered frames used to fake persistent trails.
const MAX_TRAIL_FRAMES: usize = 12;

/// Stars of one past frame: position, radius, color.
type TrailFrame = Vec<(egui::Pos2, f32, egui::Color32)>;

pub struct ViewerApp {
    sim: SimulationContext,
    config_path: Option<PathBuf>,
    /// Absolute path matched against watcher events.
    watched_path: Option<PathBuf>,
    last_load_error: Option<String>,
    paused: bool,
    show_controls: bool,
    /// Set once the population has been spawned in the real canvas.
    laid_out: bool,
    trails: VecDeque<TrailFrame>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(settings: Settings, config_path: Option<PathBuf>, seed: Option<u64>) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = None;
        let watched_path = config_path
            .as_deref()
            .map(|path| fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));

        // Watch the directory: editors that save by renaming a temp file over
        // the original would otherwise leave the watch on the replaced inode
        if let Some(dir) = watched_path.as_deref().and_then(Path::parent) {
            watcher = notify::recommended_watcher(move |res| {
                // The receiver is gone during shutdown
                let _ = tx.send(res);
            })
            .ok();
            if let Some(w) = watcher.as_mut() {
                if let Err(e) = w.watch(dir, notify::RecursiveMode::NonRecursive) {
                    log::warn!("cannot watch {}: {}", dir.display(), e);
                }
            }
        }

        // Respawned in the real canvas size on the first frame
        let viewport = Viewport {
            width: 1280.0,
            height: 720.0,
        };

        Self {
            sim: build_simulation_context(settings, viewport, seed),
            config_path,
            watched_path,
            last_load_error: None,
            paused: false,
            show_controls: true,
            laid_out: false,
            trails: VecDeque::new(),
            file_watcher: watcher,
            file_receiver: rx,
        }
    }

    fn check_file_changes(&mut self) {
        let Some(path) = self.watched_path.as_deref() else {
            return;
        };
        let mut changed = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(event) => changed |= is_config_change(&event, path),
                Err(e) => log::warn!("file watcher error: {}", e),
            }
        }
        if changed {
            self.reload_settings();
        }
    }

    fn reload_settings(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        match Settings::load(path) {
            Ok(settings) => {
                log::info!("reloaded settings from {}", path.display());
                self.sim.settings = settings;
                self.last_load_error = None;
            }
            Err(e) => {
                log::warn!("keeping previous settings: {}", e);
                self.last_load_error = Some(e.to_string());
            }
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();
        let settings = &mut self.sim.settings;

        ui.heading("Settings");
        float_slider(ui, &mut settings.gravity, "gravity", "Gravity");
        float_slider(
            ui,
            &mut settings.repulse_force,
            "repulse_force",
            "Repulsive force",
        );
        float_slider(
            ui,
            &mut settings.attract_force,
            "attract_force",
            "Attractive force",
        );
        float_slider(
            ui,
            &mut settings.trail_opacity,
            "trail_opacity",
            "Trail opacity",
        );
        float_slider(
            ui,
            &mut settings.star_size,
            "star_size",
            "Average star size",
        );
        count_slider(
            ui,
            &mut settings.star_count,
            "star_count",
            "Number of stars",
            10,
        );
        float_slider(
            ui,
            &mut settings.simulation_speed,
            "simulation_speed",
            "Simulation speed",
        );
        count_slider(
            ui,
            &mut settings.stars_per_click,
            "stars_per_click",
            "Stars per click",
            1,
        );
        ui.checkbox(&mut settings.central_gravity, "Enable central gravity");
        ui.checkbox(&mut settings.star_gravity, "Stars exert gravity");

        ui.separator();
        if ui.button("Reset settings").clicked() {
            events.push(InputEvent::ResetSettings);
        }
        if ui.button("Restart simulation").clicked() {
            events.push(InputEvent::Restart);
        }

        ui.separator();
        ui.label(egui::RichText::new("Click: spawn stars").small().weak());
        ui.label(egui::RichText::new("Shift+click: repulsor").small().weak());
        ui.label(egui::RichText::new("Ctrl+click: attractor").small().weak());
        ui.label(egui::RichText::new("Middle click: erase sources").small().weak());

        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::Restart) {
            self.trails.clear();
        }
        self.sim.apply(event);
    }

    /// Track the canvas size. The first layout respawns the population so the
    /// initial orbits circle the real center.
    fn fit_to_canvas(&mut self, width: f32, height: f32) {
        let viewport = self.sim.world.viewport;
        if (viewport.width - width).abs() > 0.5 || (viewport.height - height).abs() > 0.5 {
            self.apply(InputEvent::Resize { width, height });
        }
        if !self.laid_out {
            self.apply(InputEvent::Restart);
            self.laid_out = true;
        }
    }

    /// Run this frame's tick. A step request pauses the loop and runs exactly one tick.
    fn advance(&mut self, step_requested: bool) {
        if step_requested {
            self.paused = true;
        }
        self.sim.resume();
        if !self.paused || step_requested {
            step_simulation(&mut self.sim);
        }
        if self.paused {
            self.sim.stop();
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let response = ui.allocate_rect(rect, egui::Sense::click());
        let origin = rect.min.to_vec2();

        self.fit_to_canvas(rect.width(), rect.height());

        if let Some(pointer) = response.interact_pointer_pos() {
            let pos = galaxy_core::Vec2::new(pointer.x - origin.x, pointer.y - origin.y);
            if response.clicked() {
                let modifiers = ui.input(|i| i.modifiers);
                let modifier = if modifiers.shift {
                    ClickModifier::Repel
                } else if modifiers.command || modifiers.ctrl {
                    ClickModifier::Attract
                } else {
                    ClickModifier::None
                };
                self.apply(InputEvent::Click { pos, modifier });
            } else if response.middle_clicked() {
                self.apply(InputEvent::Erase { pos });
            }
        }

        let painter = ui.painter_at(rect);
        let to_screen = |p: galaxy_core::Vec2| egui::pos2(p.x, p.y) + origin;

        let mut current: TrailFrame = Vec::with_capacity(self.sim.world.stars.len());
        let mut fade: f32 = 1.0;
        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

        let frames = self.sim.frame();
        if let Some(RenderItem::TrailFade { opacity }) = frames.first() {
            fade = (*opacity).clamp(0.01, 1.0);
        }
        let remembered = ((1.0 / fade).ceil() as usize).clamp(1, MAX_TRAIL_FRAMES) - 1;
        while self.trails.len() > remembered {
            self.trails.pop_front();
        }
        // Oldest frame first so the newest stars land on top
        let age_count = self.trails.len();
        for (age, frame) in self.trails.iter().enumerate() {
            let alpha = (1.0 - fade).powi((age_count - age) as i32);
            for &(pos, radius, color) in frame {
                painter.circle_filled(pos, radius, color.gamma_multiply(alpha));
            }
        }

        for item in frames {
            match item {
                RenderItem::TrailFade { .. } => {}
                RenderItem::Star { pos, radius, color } => {
                    let [r, g, b] = color.rgb();
                    let color = egui::Color32::from_rgb(r, g, b);
                    let pos = to_screen(pos);
                    painter.circle_filled(pos, radius, color);
                    current.push((pos, radius, color));
                }
                RenderItem::Repulsor { pos } => {
                    painter.circle_stroke(
                        to_screen(pos),
                        SOURCE_MARKER_RADIUS,
                        egui::Stroke::new(2.0, egui::Color32::RED),
                    );
                }
                RenderItem::Attractor { pos } => {
                    painter.circle_stroke(
                        to_screen(pos),
                        SOURCE_MARKER_RADIUS,
                        egui::Stroke::new(2.0, egui::Color32::BLUE),
                    );
                }
            }
        }

        if remembered > 0 {
            self.trails.push_back(current);
        }
    }
}

fn float_slider(ui: &mut egui::Ui, value: &mut f32, name: &str, label: &str) {
    let range = Settings::slider_range(name).unwrap_or(0.0..=1.0);
    ui.add(egui::Slider::new(value, range).text(label));
}

fn count_slider(ui: &mut egui::Ui, value: &mut usize, name: &str, label: &str, step: usize) {
    let range = Settings::slider_range(name).unwrap_or(0.0..=1.0);
    let range = (*range.start() as usize)..=(*range.end() as usize);
    ui.add(
        egui::Slider::new(value, range)
            .step_by(step as f64)
            .text(label),
    );
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();
        let mut step_requested = false;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.paused { "▶ Play" } else { "⏸ Pause" }).clicked() {
                    self.paused = !self.paused;
                }
                if ui.button("⏭ Step").clicked() {
                    step_requested = true;
                }
                ui.separator();
                ui.checkbox(&mut self.show_controls, "Show controls");
                ui.separator();
                ui.label(format!(
                    "Tick: {}  Stars: {}",
                    self.sim.current_tick,
                    self.sim.world.stars.len()
                ));
            });
        });

        if let Some(ref error) = self.last_load_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Settings file error: {}", error))
                        .color(egui::Color32::RED),
                );
            });
        }

        if self.show_controls {
            egui::SidePanel::right("settings").show(ctx, |ui| self.controls_panel(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.canvas(ui));

        // Mutations above all land before this tick
        self.advance(step_requested);
        if !self.paused {
            ctx.request_repaint();
        }
    }
}

/// Whether a watcher event created or changed the settings file.
fn is_config_change(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        notify::EventKind::Create(_) | notify::EventKind::Modify(_)
    ) && event.paths.iter().any(|p| p == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};
    use galaxy_core::lifecycle::SPAWN_DISC_FRACTION;
    use galaxy_core::Vec2;
    use notify::EventKind;

    fn small_app() -> ViewerApp {
        let settings = Settings {
            star_count: 300,
            ..Settings::default()
        };
        ViewerApp::new(settings, None, Some(1))
    }

    #[test]
    fn test_first_layout_respawns_around_canvas_center() {
        let mut app = small_app();
        app.fit_to_canvas(1030.0, 690.0);

        let center = app.sim.world.viewport.center();
        assert_eq!(center, Vec2::new(515.0, 345.0));
        assert_eq!(app.sim.world.stars.len(), 300);
        let max_radius = 1030.0 / 2.0 * SPAWN_DISC_FRACTION;
        for star in &app.sim.world.stars {
            let offset = star.pos - center;
            assert!(offset.length() <= max_radius + 1e-3);
            if offset.length() > 1.0 {
                assert!(star.vel.normalize().dot(offset.normalize()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_later_resizes_keep_the_population() {
        let mut app = small_app();
        app.fit_to_canvas(1030.0, 690.0);
        let before: Vec<_> = app.sim.world.stars.iter().map(|s| s.pos).collect();

        app.fit_to_canvas(900.0, 600.0);

        assert_eq!(app.sim.world.viewport.center(), Vec2::new(450.0, 300.0));
        let after: Vec<_> = app.sim.world.stars.iter().map(|s| s.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_step_while_playing_runs_one_tick_and_pauses() {
        let mut app = small_app();
        app.advance(false);
        assert_eq!(app.sim.current_tick, 1);

        app.advance(true);
        assert_eq!(app.sim.current_tick, 2);
        assert!(app.paused);

        app.advance(false);
        assert_eq!(app.sim.current_tick, 2);
        app.advance(true);
        assert_eq!(app.sim.current_tick, 3);
    }

    #[test]
    fn test_config_changes_include_atomic_saves() {
        let path = PathBuf::from("/tmp/galaxy/settings.json");
        let other = PathBuf::from("/tmp/galaxy/settings.json.swp");

        let created = Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        let written = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(path.clone());
        let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(path.clone());
        let sibling = Event::new(EventKind::Create(CreateKind::File)).add_path(other);

        assert!(is_config_change(&created, &path));
        assert!(is_config_change(&written, &path));
        assert!(!is_config_change(&removed, &path));
        assert!(!is_config_change(&sibling, &path));
    }
}
