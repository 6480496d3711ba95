//! Example: per-frame telemetry with an on-screen graph
//!
//! What it demonstrates
//! - Recording numeric and text samples once per frame with `GraphLogger`.
//! - Feeding a series from a background thread through `channel_log()`.
//! - Painting the buffered series with `plot::paint_logger`.
//! - Flushing the log file on focus loss and when the window closes.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example frame_graph
//! ```

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;
use graphlog::{channel_log, plot, ExportFormat, GraphLogConfig, GraphLogger, LogCommand};
use tracing_subscriber::EnvFilter;

struct FrameGraphApp {
    logger: GraphLogger,
    rx: Receiver<LogCommand>,
    focused: bool,
}

impl eframe::App for FrameGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self.logger.begin_frame();
        let t = frame as f64 / 60.0;
        self.logger.add_point("sine", (t * 2.0).sin());
        self.logger.add_point("sawtooth", (frame % 90) as f64);
        if frame % 120 == 0 {
            self.logger.add_point("status", format!("checkpoint {}", frame / 120));
        }
        self.logger.drain(&self.rx);

        let focused = ctx.input(|i| i.viewport().focused).unwrap_or(true);
        if focused != self.focused {
            self.focused = focused;
            self.logger.on_focus_changed(focused);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "frame {frame}, {} series, log: {}",
                self.logger.store().len(),
                self.logger.config().log_path.display()
            ));
            let painter = ui.painter_at(ui.max_rect());
            plot::paint_logger(&painter, &self.logger);
        });
        ctx.request_repaint();
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GraphLogConfig {
        format: ExportFormat::Table,
        max_count: 600,
        ..GraphLogConfig::default()
    };
    let logger = GraphLogger::new(config);

    // Producer thread: a slow random walk stamped with the UI frame at drain time
    let (sink, rx) = channel_log();
    std::thread::spawn(move || {
        let mut level = 0.0_f64;
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        loop {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            level += (seed % 200) as f64 / 100.0 - 1.0;
            // Ignore error if the UI closed (receiver dropped)
            if sink.add_point("walk", level).is_err() {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    });

    let app = FrameGraphApp {
        logger,
        rx,
        focused: true,
    };
    // The logger flushes the log file when the app is dropped on exit.
    eframe::run_native(
        "graphlog frame graph",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
