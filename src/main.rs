#![no_main]
#![no_std]

use cortex_m_rt::entry;
use log::LevelFilter;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use splitflap::control::{ControllerConfig, MotorController};
use splitflap::drivers::{ChopTiming, PhaseDriver};
use splitflap::hw::{
    pins::BoardPins, ActiveLevel, BusyDelay, HomeSensor, I2cSlave, StatusLed, Usart, UsartLogger,
};
use splitflap::motors::StepSequencer;
use splitflap::protocol::{CommandSlot, SLAVE_ADDRESS};

/// Latest byte received on the bus, written by `I2C1_EV`, consumed by the control loop.
static TARGET: CommandSlot = CommandSlot::new();

static LOGGER: UsartLogger = UsartLogger::new();

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO, coils and enables come up low
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);
    let status = StatusLed::new(pins.led, ActiveLevel::High, true);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = LOGGER.install(Usart::new(serial), level);

    // Motor
    let delay = BusyDelay::new(cp.SYST, clocks.sysclk().raw());
    let driver = PhaseDriver::new(pins.coils, delay, ChopTiming::default());
    let stepper = StepSequencer::new(driver, pins.en1, pins.en2);
    let sensor = HomeSensor::active_low(pins.home);

    // I2C1 slave, keeps pins.i2c1 configured for the life of the program
    let _i2c_pins = pins.i2c1;
    let mut i2c = I2cSlave::new(dp.I2C1, SLAVE_ADDRESS);
    i2c.listen();

    log::info!("split-flap module on bus address {:#04x}", SLAVE_ADDRESS);

    let mut controller =
        MotorController::new(stepper, sensor, status, ControllerConfig::default());
    controller.run(&TARGET)
}

#[interrupt]
fn I2C1_EV() {
    I2cSlave::on_event(&TARGET);
}

#[interrupt]
fn I2C1_ER() {
    I2cSlave::on_error();
}
