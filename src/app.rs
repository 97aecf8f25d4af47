use eframe::egui;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

const CHIP_SUBTITLE: &str = "Market share of major AI-chip manufacturers. 2015–2017 cover the \
     discrete-GPU market, 2019 onward the dedicated AI-accelerator market; the dashed line marks \
     the redefinition.";
const MEMORY_SUBTITLE: &str =
    "Annual memory-chip production (DRAM + NAND) by company over the last ten years.";

pub struct SiliconTrendsApp {
    pub state: AppState,
}

impl Default for SiliconTrendsApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for SiliconTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: stacked dashboard sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    dashboard::section(ui, "chip", CHIP_SUBTITLE, &self.state.chip);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    dashboard::section(ui, "memory", MEMORY_SUBTITLE, &self.state.memory);
                });
        });
    }
}
