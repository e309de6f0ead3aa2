use std::time::Instant;

use chrono::Timelike;
use chrono_tz::Tz;
use embedded_graphics::{
    mono_font::{ascii::FONT_9X18, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::{DrawTargetExt, Point, RgbColor},
    text::Text,
    Drawable,
};
use esp_idf_svc::hal::delay::FreeRtos;
use watchface::{
    format::{date_text, time_text, HourCycle},
    page::face_page::FacePage,
};

use crate::{board::Board, clock};

/// Top-left of the 144x168 face, centered on the 240x240 panel.
const FACE_ORIGIN: Point = Point::new(48, 36);

/// Frame pacing while the entry slide is in flight, roughly 30 fps.
const FRAME_INTERVAL_MS: u32 = 33;

#[derive(Debug, Clone)]
pub struct AppSettings {
    // Clock
    pub hour_cycle: HourCycle,
    pub timezone: Tz,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            hour_cycle: HourCycle::H24,
            timezone: chrono_tz::UTC,
        }
    }
}

pub struct App {
    settings: AppSettings,

    board: Board,

    page: FacePage,
    shown_at: Instant,
}

impl App {
    pub fn new(board: Board) -> Self {
        Self {
            settings: AppSettings::default(),
            board,
            page: FacePage::new(),
            shown_at: Instant::now(),
        }
    }

    fn now(&self) -> chrono::NaiveDateTime {
        clock::now_local(&self.settings.timezone)
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let mut face = self.board.panel.translated(FACE_ORIGIN);
        self.page.draw(&mut face, self.shown_at.elapsed())?;
        Ok(())
    }

    // Show error message on the screen
    fn handle_error(&mut self, e: anyhow::Error) {
        log::error!("Unexpected error: {:?}", e);

        // Create a new character style
        let style = MonoTextStyle::new(&FONT_9X18, Rgb565::WHITE);

        // Create a text at position (20, 20) and draw it using the previously defined style
        Text::new(
            &format!("Unexpected error: {:?}", e),
            Point::new(20, 20),
            style,
        )
        .draw(&mut self.board.panel)
        .unwrap();
    }

    fn play_entry_slide(&mut self) -> anyhow::Result<()> {
        log::info!("entry slide");

        loop {
            let elapsed = self.shown_at.elapsed();
            self.redraw()?;

            if self.page.entry.is_finished(elapsed) {
                return Ok(());
            }

            FreeRtos::delay_ms(FRAME_INTERVAL_MS);
        }
    }

    fn run_internal(&mut self) -> anyhow::Result<()> {
        log::info!("initialize");

        let now = self.now();
        self.page
            .set_time(time_text(now.time(), self.settings.hour_cycle));
        self.page.set_date(date_text(now.date()));

        // Slide the panes in, then settle into the minute loop.
        self.play_entry_slide()?;

        let mut minute = now.minute();
        loop {
            let wait = clock::until_next_minute(self.now());
            FreeRtos::delay_ms((wait.as_millis() as u32).max(1));

            let now = self.now();
            if now.minute() == minute {
                continue;
            }
            minute = now.minute();

            // Only the time string recomputes on the tick, the date keeps
            // its startup value until the face reloads.
            self.page
                .set_time(time_text(now.time(), self.settings.hour_cycle));
            self.redraw()?;

            log::info!("minute tick: {}", self.page.time);
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.run_internal() {
            self.handle_error(e);
        }
    }
}
