use display_interface_spi::SPIInterfaceNoCS;
use esp_idf_svc::hal::{
    delay::Delay,
    gpio::{self, AnyIOPin, Output, PinDriver},
    prelude::*,
    spi::{self, SpiDeviceDriver, SpiDriver},
};
use mipidsi::{models::ST7789, Builder, Orientation};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

pub type Panel = mipidsi::Display<
    SPIInterfaceNoCS<SpiDeviceDriver<'static, SpiDriver<'static>>, PinDriver<'static, gpio::Gpio27, Output>>,
    ST7789,
    PinDriver<'static, gpio::Gpio26, Output>,
>;

pub struct Board {
    pub backlight: PinDriver<'static, gpio::Gpio4, Output>,

    pub delay: Delay,

    pub panel: Panel,
}

impl Board {
    pub fn init(peripherals: Peripherals) -> Self {
        let spi_p_pin = peripherals.spi2;
        let sclk_pin = peripherals.pins.gpio18;
        let sdo_pin = peripherals.pins.gpio19;
        let cs_pin = peripherals.pins.gpio5;

        let dc_pin = peripherals.pins.gpio27;
        let rst_pin = peripherals.pins.gpio26;

        let backlight_pin = peripherals.pins.gpio4;

        let spi = SpiDeviceDriver::new_single(
            spi_p_pin,
            sclk_pin,
            sdo_pin,
            Option::<AnyIOPin>::None,
            Some(cs_pin),
            &spi::config::DriverConfig::new(),
            &spi::config::Config::new().baudrate(26.MHz().into()),
        )
        .unwrap();

        let dc = PinDriver::output(dc_pin).unwrap();
        let rst = PinDriver::output(rst_pin).unwrap();

        let mut backlight = PinDriver::output(backlight_pin).unwrap();

        // Turn on the LCD backlight
        backlight.set_high().unwrap();

        // Setup delay
        let mut delay = Delay::new_default();

        // Setup panel
        let panel = Builder::st7789(SPIInterfaceNoCS::new(spi, dc))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut delay, Some(rst))
            .unwrap();

        Self {
            backlight,
            delay,
            panel,
        }
    }
}
