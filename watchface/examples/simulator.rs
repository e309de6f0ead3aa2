use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use watchface::{
    format::{date_text, time_text, HourCycle},
    layout,
    page::face_page::FacePage,
};

fn main() -> anyhow::Result<()> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(layout::SCREEN);

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watchface", &output_settings);

    let mut page = FacePage::new();

    let now = Local::now().naive_local();
    page.set_time(time_text(now.time(), HourCycle::H24));
    page.set_date(date_text(now.date()));

    let shown_at = Instant::now();
    let mut minute = now.minute();

    'running: loop {
        let now = Local::now().naive_local();

        // Only the time refreshes on the minute, the date stays as rendered
        // at startup.
        if now.minute() != minute {
            minute = now.minute();
            page.set_time(time_text(now.time(), HourCycle::H24));
        }

        page.draw(&mut display, shown_at.elapsed())?;

        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                _ => {}
            }
        }

        std::thread::sleep(Duration::from_millis(33));
    }

    Ok(())
}
