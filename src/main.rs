//! Rescue Board entry point
//!
//! Handles platform-specific initialization and opens the dashboard session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use rescue_board::platform::{LocalStorage, clock_string};
    use rescue_board::{Dashboard, DashboardConfig, Route, Screen};

    /// Set text of the element with `id`, if present
    fn set_text(id: &str, text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.set_text_content(Some(text));
        }
    }

    fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rescue Board starting...");

        let storage = match LocalStorage::open() {
            Ok(storage) => storage,
            Err(e) => {
                log::error!("LocalStorage unavailable: {}", e);
                return;
            }
        };

        let config = DashboardConfig::load(&storage);
        set_text("station-name", &config.station_name);
        set_text("unit-name", &config.unit_name);
        set_text("clock", &clock_string());

        let dashboard = Dashboard::open(storage, config);
        let route = Route::parse(&current_path());

        match dashboard.resolve(&route) {
            Screen::Overview => {
                log::info!(
                    "Overview: {} teams, {} available rescuers ({} view)",
                    dashboard.teams().len(),
                    dashboard.rescuers().len(),
                    dashboard.view_mode().as_str()
                );
            }
            Screen::TeamDetail(team) => {
                log::info!("Team {} detail ({})", team.id(), team.status.label());
            }
            Screen::FirefighterDetail { team, slot } => {
                let ff = team.firefighter(slot);
                log::info!(
                    "Firefighter {}{} detail: {} bar ({})",
                    team.id(),
                    slot,
                    ff.oxygen_level,
                    ff.oxygen_band()
                );
            }
            Screen::NotFound => {
                log::warn!("Nothing found at {}", current_path());
                set_text("not-found", "Powrót do strony głównej");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rescue_board::platform::{MemoryStorage, clock_string};
    use rescue_board::{Dashboard, DashboardConfig, FirefighterPatch, Slot};

    env_logger::init();
    log::info!("Rescue Board (native) starting...");
    log::info!("Native mode uses in-memory storage - run with `trunk serve` for the web version");

    let mut dashboard = Dashboard::open(MemoryStorage::new(), DashboardConfig::default());
    let config = dashboard.config().clone();
    println!("{} / {}  {}", config.station_name, config.unit_name, clock_string());

    dashboard.update_firefighter(1, Slot::A, &FirefighterPatch::new().oxygen_level(150));

    for team in dashboard.teams() {
        println!(
            "{:>2} {:<10} {:<8} {:>3} min",
            team.id(),
            team.kind,
            team.status.as_str(),
            team.exit_time
        );
        for slot in Slot::ALL {
            let ff = team.firefighter(slot);
            println!(
                "     {} {:<4} {:>3} bar {:<7} {:>3} min  {}",
                slot,
                ff.serial_number,
                ff.oxygen_level,
                ff.oxygen_band().as_str(),
                ff.exit_time,
                ff.name
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
