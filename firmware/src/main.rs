use app::App;
use board::Board;
use esp_idf_svc::hal::prelude::Peripherals;

pub mod app;
pub mod board;
pub mod clock;

fn main() {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().unwrap();

    let board = Board::init(peripherals);

    let mut app = App::new(board);
    app.run();
}
